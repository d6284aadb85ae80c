use crate::console_host::ConsoleHost;
use layerhost_core::{GuestContent, GuestRef, LayerHostResult, OverlayStack};
use log::info;
use std::rc::Rc;

/// A confirm dialog stacked over a settings panel. The panel keeps its layer
/// while buried and comes back when the confirm closes; both completions
/// resolve with their own value.

struct Panel(&'static str);

impl GuestContent for Panel {
    fn guest_id(&self) -> Option<&str> {
        Some(self.0)
    }
}

fn report(stack: &OverlayStack<String>) {
    let ids: Vec<String> = stack.ids().map(|id| id.to_string()).collect();
    info!(
        "stack: {:?}, top: {:?}, visible: {}",
        ids,
        stack.top().map(|layer| layer.id().to_string()),
        stack.visible(),
    );
}

pub async fn run() -> LayerHostResult<()> {
    let mut stack: OverlayStack<String> = OverlayStack::new(Box::new(ConsoleHost::new()));
    let settings: GuestRef = Rc::new(Panel("settings-panel"));
    let confirm: GuestRef = Rc::new(Panel("confirm-dialog"));

    info!("opening the settings panel");
    let settings_handle = stack.open(&settings)?;
    report(&stack);

    info!("stacking a confirm dialog on top");
    let confirm_handle = stack.open(&confirm)?;
    report(&stack);

    // The panel's waiter keeps running while its layer is buried.
    let mut settings_waiter = settings_handle.clone();
    let waiter = tokio::task::spawn_local(async move {
        let value = settings_waiter.wait().await;
        info!("settings waiter woke up with: {value:?}");
    });

    info!("confirming discards the edits");
    stack.close(&confirm, "discard-changes".to_owned())?;
    info!("confirm resolved with: {:?}", confirm_handle.try_value());
    report(&stack);

    info!("closing the revealed settings panel");
    stack.close(&settings, "closed".to_owned())?;
    report(&stack);

    waiter
        .await
        .map_err(|e| format!("settings waiter failed: {e}"))?;
    Ok(())
}
