use crate::completion::{CompletionHandle, CompletionSignal};
use crate::guest::{GuestId, GuestRef};

/// One stack entry: a guest identity paired with its close signal.
pub struct Layer<V> {
    id: GuestId,
    guest: GuestRef,
    completion: CompletionSignal<V>,
}

impl<V> Layer<V> {
    pub(crate) fn new(id: GuestId, guest: GuestRef) -> Self {
        Self {
            id,
            guest,
            completion: CompletionSignal::new(),
        }
    }

    pub fn id(&self) -> &GuestId {
        &self.id
    }

    pub fn guest(&self) -> &GuestRef {
        &self.guest
    }

    /// Handle resolving when this layer closes.
    pub fn handle(&self) -> CompletionHandle<V> {
        self.completion.handle()
    }

    pub(crate) fn resolve(&self, value: V) -> bool {
        self.completion.resolve(value)
    }
}
