use crate::console_host::ConsoleHost;
use layerhost_core::{GuestContent, GuestRef, LayerHostResult, OverlayStack};
use log::info;
use std::rc::Rc;

/// Two sessions of the same dialog. Each open hands out a fresh completion,
/// so the value from the first session stays with the first handle no
/// matter how often the dialog comes back.

struct Wizard;

impl GuestContent for Wizard {
    fn guest_id(&self) -> Option<&str> {
        Some("setup-wizard")
    }
}

pub async fn run() -> LayerHostResult<()> {
    let mut stack: OverlayStack<String> = OverlayStack::new(Box::new(ConsoleHost::new()));
    let wizard: GuestRef = Rc::new(Wizard);

    info!("first session");
    let mut first = stack.open(&wizard)?;
    stack.close(&wizard, "finished-step-one".to_owned())?;
    info!("first handle resolved with: {:?}", first.wait().await);

    info!("second session reuses the same guest");
    let second = stack.open(&wizard)?;
    info!(
        "first handle still holds: {:?}, second is pending: {:?}",
        first.try_value(),
        second.try_value(),
    );

    stack.close(&wizard, "finished-step-two".to_owned())?;
    info!("second handle resolved with: {:?}", second.try_value());
    info!("first handle is untouched: {:?}", first.try_value());

    Ok(())
}
