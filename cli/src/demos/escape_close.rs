use crate::console_host::ConsoleHost;
use layerhost_core::hotkey::{HotkeyMap, KeyPress};
use layerhost_core::{Config, GuestContent, GuestRef, LayerHostResult, OverlayStack};
use log::{error, info};
use std::rc::Rc;

/// Hotkey-driven closing: the configured close combo pops the top overlay,
/// one press at a time, and is a quiet no-op once the stack is empty.

struct Sheet(&'static str);

impl GuestContent for Sheet {
    fn guest_id(&self) -> Option<&str> {
        Some(self.0)
    }
}

type Stack = OverlayStack<Option<String>>;

pub async fn run() -> LayerHostResult<()> {
    let mut stack: Stack = OverlayStack::new(Box::new(ConsoleHost::new()));
    let combo = Config::close_hotkey();
    info!("close hotkey is '{combo}'");

    let mut hotkeys: HotkeyMap<Stack> = HotkeyMap::new();
    hotkeys.add_combo(combo.clone(), |stack| match stack.close_top(None) {
        Ok(true) => info!("closed the top overlay"),
        Ok(false) => info!("nothing left to close"),
        Err(e) => error!("close failed: {e}"),
    });

    let upload: GuestRef = Rc::new(Sheet("upload-sheet"));
    let progress: GuestRef = Rc::new(Sheet("progress-panel"));
    stack.open(&upload)?;
    stack.open(&progress)?;
    info!("two overlays open, visible: {}", stack.visible());

    let presses = [
        KeyPress::of("enter"),
        combo.to_press(),
        combo.to_press(),
        combo.to_press(),
    ];
    for press in presses {
        info!("key press: {press:?}");
        if !hotkeys.handle(&mut stack, &press) {
            info!("no binding matched, press ignored");
        }
    }

    info!("stack empty: {}, visible: {}", stack.is_empty(), stack.visible());
    Ok(())
}
