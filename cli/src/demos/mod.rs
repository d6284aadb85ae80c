use layerhost_core::LayerHostResult;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

mod dialog_basic;
mod escape_close;
mod interactive;
mod reopen;
mod stacked;

/// Static demo definition
pub struct DemoDef {
    pub name: &'static str,
    pub description: &'static str,
}

pub const DEMOS: &[DemoDef] = &[
    DemoDef {
        name: "dialog",
        description: "open a dialog, pick an option, await its value",
    },
    DemoDef {
        name: "stack",
        description: "stack a confirm dialog over a settings panel",
    },
    DemoDef {
        name: "escape",
        description: "close overlays with the configured hotkey",
    },
    DemoDef {
        name: "reopen",
        description: "reopen a dialog and keep earlier close values intact",
    },
    DemoDef {
        name: "interactive",
        description: "drive the overlay stack from a prompt",
    },
];

pub async fn run_demo(name: &str, interrupted: Arc<AtomicBool>) -> LayerHostResult<()> {
    match name {
        "dialog" => dialog_basic::run().await,
        "stack" => stacked::run().await,
        "escape" => escape_close::run().await,
        "reopen" => reopen::run().await,
        "interactive" => interactive::run(interrupted).await,
        other => Err(format!("unknown demo '{other}', try --list-demos").into()),
    }
}
