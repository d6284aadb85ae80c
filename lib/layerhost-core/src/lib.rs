use thiserror::Error;

pub mod bindings;
pub mod config;
pub mod hotkey;
pub mod paths;

mod completion;
mod guest;
mod host;
mod layer;
mod stack;

pub use completion::{CompletionHandle, CompletionSignal};
pub use config::Config;
pub use guest::{GuestContent, GuestId, GuestRef};
pub use host::{Host, HostBackend, LoggingHostBackend, UnmountPolicy};
pub use layer::Layer;
pub use stack::OverlayStack;

pub fn version() -> &'static str {
    option_env!("VERSION").unwrap_or("v0.0.0-dev")
}

#[derive(Debug, Error)]
pub enum LayerHostError {
    #[error("{0}")]
    Error(String),
    #[error("config error: {0}")]
    Config(String),
}

pub type LayerHostResult<T> = Result<T, LayerHostError>;

impl From<&str> for LayerHostError {
    fn from(value: &str) -> Self {
        LayerHostError::Error(value.to_owned())
    }
}
impl From<String> for LayerHostError {
    fn from(error: String) -> Self {
        LayerHostError::Error(error)
    }
}
