use tokio::sync::watch;

/// Single-shot close signal for one overlay layer.
///
/// The stack holds the signal and resolves it exactly once when the layer is
/// closed. Any number of [`CompletionHandle`]s can observe it, subscribed
/// before or after resolution; every observer sees the same value.
pub struct CompletionSignal<V> {
    tx: watch::Sender<Option<V>>,
}

/// Awaitable view of a [`CompletionSignal`].
pub struct CompletionHandle<V> {
    rx: watch::Receiver<Option<V>>,
}

impl<V> CompletionSignal<V> {
    pub fn new() -> Self {
        Self {
            tx: watch::Sender::new(None),
        }
    }

    pub fn handle(&self) -> CompletionHandle<V> {
        CompletionHandle {
            rx: self.tx.subscribe(),
        }
    }

    /// Resolve with `value`. Only the first resolution sticks; returns
    /// whether this call was the one that resolved the signal.
    pub fn resolve(&self, value: V) -> bool {
        self.tx.send_if_modified(|slot| {
            if slot.is_some() {
                false
            } else {
                *slot = Some(value);
                true
            }
        })
    }

    pub fn is_resolved(&self) -> bool {
        self.tx.borrow().is_some()
    }
}

impl<V> Default for CompletionSignal<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> CompletionHandle<V> {
    /// The resolved value, or `None` while still pending.
    pub fn try_value(&self) -> Option<V> {
        self.rx.borrow().clone()
    }

    /// Wait for resolution. Returns `None` only if the signal was dropped
    /// without ever resolving.
    pub async fn wait(&mut self) -> Option<V> {
        match self.rx.wait_for(|slot| slot.is_some()).await {
            Ok(slot) => slot.clone(),
            Err(_) => None,
        }
    }
}

impl<V> Clone for CompletionHandle<V> {
    fn clone(&self) -> Self {
        Self {
            rx: self.rx.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_handle_has_no_value() {
        let signal: CompletionSignal<&str> = CompletionSignal::new();
        let handle = signal.handle();

        assert!(!signal.is_resolved());
        assert_eq!(handle.try_value(), None);
    }

    #[test]
    fn test_first_resolution_wins() {
        let signal = CompletionSignal::new();
        let handle = signal.handle();

        assert!(signal.resolve("first"));
        assert!(!signal.resolve("second"));
        assert!(signal.is_resolved());
        assert_eq!(handle.try_value(), Some("first"));
    }

    #[test]
    fn test_handle_subscribed_after_resolution_sees_value() {
        let signal = CompletionSignal::new();
        signal.resolve(42);

        assert_eq!(signal.handle().try_value(), Some(42));
    }

    #[tokio::test]
    async fn test_every_handle_observes_the_same_value() {
        let signal = CompletionSignal::new();
        let mut early = signal.handle();
        let mut cloned = early.clone();

        signal.resolve("done");
        let mut late = signal.handle();

        assert_eq!(early.wait().await, Some("done"));
        assert_eq!(cloned.wait().await, Some("done"));
        assert_eq!(late.wait().await, Some("done"));
    }

    #[tokio::test]
    async fn test_wait_returns_none_when_dropped_unresolved() {
        let signal: CompletionSignal<&str> = CompletionSignal::new();
        let mut handle = signal.handle();
        drop(signal);

        assert_eq!(handle.wait().await, None);
    }

    #[tokio::test]
    async fn test_wait_still_resolves_after_signal_dropped() {
        let signal = CompletionSignal::new();
        let mut handle = signal.handle();
        signal.resolve("kept");
        drop(signal);

        assert_eq!(handle.wait().await, Some("kept"));
    }
}
