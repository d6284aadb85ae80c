use std::fmt;
use std::rc::Rc;

pub type GuestRef = Rc<dyn GuestContent>;

/// Content that can be presented in the shared host container.
///
/// Guests are owned by their callers and passed to the stack by reference;
/// the stack only borrows them for display and releases its clone on close.
pub trait GuestContent {
    /// Stable identity key for this guest. Guests without one are keyed by
    /// allocation address, so reopening the same `Rc` still dedupes.
    fn guest_id(&self) -> Option<&str> {
        None
    }

    /// Called after the guest's content has been attached to the host.
    fn on_attach(&self) {}

    /// Called after the guest's content has been detached from the host.
    fn on_detach(&self) {}
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GuestId {
    Named(String),
    Address(usize),
}

impl GuestId {
    pub fn of(guest: &GuestRef) -> Self {
        match guest.guest_id() {
            Some(id) => GuestId::Named(id.to_owned()),
            None => GuestId::Address(Rc::as_ptr(guest) as *const () as usize),
        }
    }
}

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuestId::Named(name) => f.write_str(name),
            GuestId::Address(addr) => write!(f, "guest@{addr:x}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);
    impl GuestContent for Named {
        fn guest_id(&self) -> Option<&str> {
            Some(self.0)
        }
    }

    struct Anonymous;
    impl GuestContent for Anonymous {}

    #[test]
    fn test_named_identity() {
        let guest: GuestRef = Rc::new(Named("settings"));
        assert_eq!(GuestId::of(&guest), GuestId::Named("settings".to_owned()));
        assert_eq!(GuestId::of(&guest).to_string(), "settings");
    }

    #[test]
    fn test_address_identity_follows_the_allocation() {
        let guest: GuestRef = Rc::new(Anonymous);
        let same: GuestRef = guest.clone();
        let other: GuestRef = Rc::new(Anonymous);

        assert_eq!(GuestId::of(&guest), GuestId::of(&same));
        assert_ne!(GuestId::of(&guest), GuestId::of(&other));
    }

    #[test]
    fn test_address_identity_display_is_tagged() {
        let guest: GuestRef = Rc::new(Anonymous);
        assert!(GuestId::of(&guest).to_string().starts_with("guest@"));
    }
}
