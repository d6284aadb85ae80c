use crate::completion::CompletionHandle;
use crate::config::Config;
use crate::guest::{GuestId, GuestRef};
use crate::host::{Host, HostBackend, UnmountPolicy};
use crate::layer::Layer;
use crate::LayerHostResult;
use indexmap::IndexMap;
use log::debug;

/// Ordered collection of overlay layers sharing one host container.
///
/// Map iteration order is the z-order: the most recently opened or reopened
/// guest sits on top and is the only one attached to the host. Closing the
/// top reveals the layer underneath; closing the last layer hides the host.
///
/// Construct one per UI shell and pass it by reference to whatever needs to
/// open overlays. Guest content must not be reparented by callers while its
/// layer is registered here.
pub struct OverlayStack<V> {
    layers: IndexMap<GuestId, Layer<V>>,
    host: Host,
}

impl<V: Clone> OverlayStack<V> {
    /// Stack with the unmount policy taken from the current config.
    pub fn new(backend: Box<dyn HostBackend>) -> Self {
        let policy = if Config::unmount_when_empty() {
            UnmountPolicy::UnmountWhenEmpty
        } else {
            UnmountPolicy::KeepMounted
        };
        Self::with_policy(backend, policy)
    }

    pub fn with_policy(backend: Box<dyn HostBackend>, policy: UnmountPolicy) -> Self {
        Self {
            layers: IndexMap::new(),
            host: Host::new(backend, policy),
        }
    }

    /// Open `guest` on top of the stack and return a handle that resolves
    /// when it closes.
    ///
    /// Opening a guest that is already open moves its layer to the top
    /// without duplicating it; the pending handle stays valid. The host is
    /// mounted on first use and shown whenever the stack goes occupied.
    pub fn open(&mut self, guest: &GuestRef) -> LayerHostResult<CompletionHandle<V>> {
        let id = GuestId::of(guest);
        let was_empty = self.layers.is_empty();

        // Bury whatever is on display, unless it is this guest.
        if self.host.attached().map_or(false, |attached| attached != &id) {
            self.host.detach_current()?;
        }

        // Move to top: one entry per identity, reinserted at the end.
        let layer = match self.layers.shift_remove(&id) {
            Some(layer) => layer,
            None => Layer::new(id.clone(), guest.clone()),
        };
        let handle = layer.handle();
        self.layers.insert(id.clone(), layer);

        self.host.ensure_mounted()?;
        if was_empty {
            self.host.set_occupied(true)?;
        }
        self.host.attach(&id, guest)?;

        debug!("opened {id} (depth {})", self.layers.len());
        Ok(handle)
    }

    /// Close `guest`, resolving its completion with `value`.
    ///
    /// Closing a guest that is not open is a no-op, as is the second of two
    /// close calls racing over the same layer.
    pub fn close(&mut self, guest: &GuestRef, value: V) -> LayerHostResult<()> {
        self.close_id(&GuestId::of(guest), value)
    }

    /// Close the layer currently on top. Returns whether one was closed.
    pub fn close_top(&mut self, value: V) -> LayerHostResult<bool> {
        match self.layers.last().map(|(id, _)| id.clone()) {
            Some(id) => {
                self.close_id(&id, value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn close_id(&mut self, id: &GuestId, value: V) -> LayerHostResult<()> {
        let attached_here = self.host.attached().map_or(false, |attached| attached == id);

        let layer = match self.layers.shift_remove(id) {
            Some(layer) => layer,
            None => {
                debug!("close for {id} ignored, no such layer");
                return Ok(());
            }
        };

        if attached_here {
            self.host.detach_current()?;
        }
        if !layer.resolve(value) {
            debug!("layer {id} was already resolved");
        }

        // Reveal the layer underneath, or go dark if that was the last one.
        let next_top = self
            .layers
            .last()
            .map(|(top_id, top)| (top_id.clone(), top.guest().clone()));
        match next_top {
            Some((top_id, top_guest)) => self.host.attach(&top_id, &top_guest)?,
            None => self.host.set_occupied(false)?,
        }

        debug!("closed {id} (depth {})", self.layers.len());
        Ok(())
    }

    /// Layer registered for `guest`, if it is currently open.
    pub fn get(&self, guest: &GuestRef) -> Option<&Layer<V>> {
        self.layers.get(&GuestId::of(guest))
    }

    /// The layer currently on display.
    pub fn top(&self) -> Option<&Layer<V>> {
        self.layers.last().map(|(_, layer)| layer)
    }

    /// The host is visible exactly when the stack is non-empty.
    pub fn visible(&self) -> bool {
        !self.layers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layer identities, bottom to top.
    pub fn ids(&self) -> impl Iterator<Item = &GuestId> {
        self.layers.keys()
    }

    pub fn host(&self) -> &Host {
        &self.host
    }
}
