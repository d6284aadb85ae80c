use crate::guest::{GuestId, GuestRef};
use crate::LayerHostResult;
use log::{debug, trace};

/// Presentation side effects for the shared host container.
///
/// The stack drives these calls; implementations only have to mirror them
/// onto whatever surface they render to. A backend is never asked to show a
/// second guest without the previous one being cleared first.
pub trait HostBackend {
    /// Attach the host container to its document or scene.
    fn mount(&mut self) -> LayerHostResult<()>;

    /// Remove the host container again.
    fn unmount(&mut self) -> LayerHostResult<()>;

    /// Show or hide the mounted container, backdrop included.
    fn set_visible(&mut self, visible: bool) -> LayerHostResult<()>;

    /// Place a guest's content inside the container.
    fn show_guest(&mut self, id: &GuestId, guest: &GuestRef) -> LayerHostResult<()>;

    /// Take a guest's content out of the container.
    fn clear_guest(&mut self, id: &GuestId, guest: &GuestRef) -> LayerHostResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmountPolicy {
    /// Detach the host container whenever the stack empties.
    UnmountWhenEmpty,
    /// Keep the container mounted and merely hide it.
    KeepMounted,
}

/// The single shared container guests are displayed in.
///
/// At most one guest is attached at a time. Visibility is derived by the
/// owning stack from its occupancy and pushed through here; it is never
/// stored as independent state.
pub struct Host {
    backend: Box<dyn HostBackend>,
    policy: UnmountPolicy,
    mounted: bool,
    attached: Option<(GuestId, GuestRef)>,
}

impl Host {
    pub(crate) fn new(backend: Box<dyn HostBackend>, policy: UnmountPolicy) -> Self {
        Self {
            backend,
            policy,
            mounted: false,
            attached: None,
        }
    }

    pub fn mounted(&self) -> bool {
        self.mounted
    }

    pub fn policy(&self) -> UnmountPolicy {
        self.policy
    }

    /// Identity of the guest currently on display, if any.
    pub fn attached(&self) -> Option<&GuestId> {
        self.attached.as_ref().map(|(id, _)| id)
    }

    pub(crate) fn ensure_mounted(&mut self) -> LayerHostResult<()> {
        if !self.mounted {
            trace!("mounting host container");
            self.backend.mount()?;
            self.mounted = true;
        }
        Ok(())
    }

    pub(crate) fn attach(&mut self, id: &GuestId, guest: &GuestRef) -> LayerHostResult<()> {
        if self.attached.as_ref().map(|(attached, _)| attached) == Some(id) {
            return Ok(());
        }
        debug!("host: attaching {id}");
        self.backend.show_guest(id, guest)?;
        guest.on_attach();
        self.attached = Some((id.clone(), guest.clone()));
        Ok(())
    }

    pub(crate) fn detach_current(&mut self) -> LayerHostResult<()> {
        if let Some((id, guest)) = self.attached.take() {
            debug!("host: detaching {id}");
            self.backend.clear_guest(&id, &guest)?;
            guest.on_detach();
        }
        Ok(())
    }

    /// Called on occupancy transitions only. Going occupied shows the
    /// container; going empty hides it and, policy permitting, unmounts.
    pub(crate) fn set_occupied(&mut self, occupied: bool) -> LayerHostResult<()> {
        if occupied {
            return self.backend.set_visible(true);
        }
        self.backend.set_visible(false)?;
        if self.policy == UnmountPolicy::UnmountWhenEmpty && self.mounted {
            trace!("unmounting empty host container");
            self.backend.unmount()?;
            self.mounted = false;
        }
        Ok(())
    }
}

/// Backend that only logs transitions. Handy when embedding the stack
/// somewhere that has no surface of its own yet.
#[derive(Debug, Default)]
pub struct LoggingHostBackend;

impl HostBackend for LoggingHostBackend {
    fn mount(&mut self) -> LayerHostResult<()> {
        debug!("host mounted");
        Ok(())
    }

    fn unmount(&mut self) -> LayerHostResult<()> {
        debug!("host unmounted");
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) -> LayerHostResult<()> {
        debug!("host visible: {visible}");
        Ok(())
    }

    fn show_guest(&mut self, id: &GuestId, _guest: &GuestRef) -> LayerHostResult<()> {
        debug!("host showing {id}");
        Ok(())
    }

    fn clear_guest(&mut self, id: &GuestId, _guest: &GuestRef) -> LayerHostResult<()> {
        debug!("host clearing {id}");
        Ok(())
    }
}
