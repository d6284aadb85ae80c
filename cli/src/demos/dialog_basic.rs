use crate::console_host::ConsoleHost;
use layerhost_core::bindings::{EventBindings, UiEvent, UiEventKind};
use layerhost_core::{CompletionHandle, GuestContent, GuestRef, LayerHostResult, OverlayStack};
use log::{debug, error, info, warn};
use std::cell::RefCell;
use std::rc::Rc;

/// The classic walkthrough: a page opens an option dialog, the user picks an
/// option and confirms, and the page awaits the picked value. A second round
/// dismisses the dialog instead.

struct OptionDialog {
    selected: RefCell<String>,
}

impl GuestContent for OptionDialog {
    fn guest_id(&self) -> Option<&str> {
        Some("option-dialog")
    }

    fn on_attach(&self) {
        info!("dialog is on display, options ready");
    }

    fn on_detach(&self) {
        info!("dialog left the display");
    }
}

struct App {
    stack: OverlayStack<Option<String>>,
    dialog: Rc<OptionDialog>,
    pending: Option<CompletionHandle<Option<String>>>,
}

fn bindings() -> EventBindings<App> {
    let mut bindings = EventBindings::new();

    bindings.bind("open-dialog", UiEventKind::Click, |app: &mut App, _| {
        let guest: GuestRef = app.dialog.clone();
        match app.stack.open(&guest) {
            Ok(handle) => app.pending = Some(handle),
            Err(e) => error!("could not open the dialog: {e}"),
        }
    });

    bindings.bind("option-select", UiEventKind::Change, |app: &mut App, event| {
        if let UiEvent::Change { value, .. } = event {
            *app.dialog.selected.borrow_mut() = value.clone();
        }
    });

    bindings.bind("done", UiEventKind::Click, |app: &mut App, _| {
        let guest: GuestRef = app.dialog.clone();
        let picked = app.dialog.selected.borrow().clone();
        if let Err(e) = app.stack.close(&guest, Some(picked)) {
            error!("could not close the dialog: {e}");
        }
    });

    bindings.bind("dismiss", UiEventKind::Click, |app: &mut App, _| {
        let guest: GuestRef = app.dialog.clone();
        if let Err(e) = app.stack.close(&guest, None) {
            error!("could not dismiss the dialog: {e}");
        }
    });

    bindings
}

async fn settle(app: &mut App) {
    if let Some(mut handle) = app.pending.take() {
        match handle.wait().await {
            Some(value) => info!("dialog closed with: {value:?}"),
            None => warn!("dialog went away without resolving"),
        }
    }
}

pub async fn run() -> LayerHostResult<()> {
    info!("dialog demo: open, pick an option, confirm");

    let mut app = App {
        stack: OverlayStack::new(Box::new(ConsoleHost::new())),
        dialog: Rc::new(OptionDialog {
            selected: RefCell::new("option1".to_owned()),
        }),
        pending: None,
    };
    let mut bindings = bindings();

    let script = [
        UiEvent::click("open-dialog"),
        UiEvent::change("option-select", "option2"),
        UiEvent::click("done"),
    ];
    for event in script {
        debug!("ui event: {event:?}");
        bindings.dispatch(&mut app, &event);
    }
    settle(&mut app).await;

    info!("second round: open again, dismiss without picking");
    for event in [UiEvent::click("open-dialog"), UiEvent::click("dismiss")] {
        debug!("ui event: {event:?}");
        bindings.dispatch(&mut app, &event);
    }
    settle(&mut app).await;

    Ok(())
}
