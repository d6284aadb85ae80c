use crate::hotkey::KeyPress;
use std::collections::HashMap;

/// An input event fed through a binding table by the embedding shell.
#[derive(Debug, Clone)]
pub enum UiEvent {
    Click { element: String },
    Change { element: String, value: String },
    KeyDown { press: KeyPress },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiEventKind {
    Click,
    Change,
    KeyDown,
}

impl UiEvent {
    pub fn click(element: &str) -> Self {
        UiEvent::Click {
            element: element.to_owned(),
        }
    }

    pub fn change(element: &str, value: &str) -> Self {
        UiEvent::Change {
            element: element.to_owned(),
            value: value.to_owned(),
        }
    }

    pub fn key(press: KeyPress) -> Self {
        UiEvent::KeyDown { press }
    }

    pub fn kind(&self) -> UiEventKind {
        match self {
            UiEvent::Click { .. } => UiEventKind::Click,
            UiEvent::Change { .. } => UiEventKind::Change,
            UiEvent::KeyDown { .. } => UiEventKind::KeyDown,
        }
    }

    /// The element an event targets. Key events target the whole shell and
    /// have none; route those through a `HotkeyMap` instead.
    pub fn element(&self) -> Option<&str> {
        match self {
            UiEvent::Click { element } => Some(element),
            UiEvent::Change { element, .. } => Some(element),
            UiEvent::KeyDown { .. } => None,
        }
    }
}

/// Element and event kind to handler table.
///
/// Components register their handlers explicitly when they are set up;
/// nothing is matched on naming conventions, so a binding either exists
/// here or the event falls through.
pub struct EventBindings<Ctx> {
    handlers: HashMap<(String, UiEventKind), Box<dyn FnMut(&mut Ctx, &UiEvent)>>,
}

impl<Ctx> EventBindings<Ctx> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Bind `handler` to `kind` events on the element named `element`.
    /// Binding the same pair again replaces the previous handler.
    pub fn bind<F>(&mut self, element: &str, kind: UiEventKind, handler: F)
    where
        F: FnMut(&mut Ctx, &UiEvent) + 'static,
    {
        self.handlers.insert((element.to_owned(), kind), Box::new(handler));
    }

    /// Run the handler bound to this event. Returns whether one ran.
    pub fn dispatch(&mut self, ctx: &mut Ctx, event: &UiEvent) -> bool {
        let key = match event.element() {
            Some(element) => (element.to_owned(), event.kind()),
            None => return false,
        };
        match self.handlers.get_mut(&key) {
            Some(handler) => {
                handler(ctx, event);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<Ctx> Default for EventBindings<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}
