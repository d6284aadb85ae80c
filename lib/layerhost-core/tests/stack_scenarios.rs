use layerhost_core::{
    GuestContent, GuestId, GuestRef, HostBackend, LayerHostResult, OverlayStack, UnmountPolicy,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct RecordingSurface {
    log: Rc<RefCell<Vec<String>>>,
}

impl HostBackend for RecordingSurface {
    fn mount(&mut self) -> LayerHostResult<()> {
        self.log.borrow_mut().push("mount".to_owned());
        Ok(())
    }

    fn unmount(&mut self) -> LayerHostResult<()> {
        self.log.borrow_mut().push("unmount".to_owned());
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) -> LayerHostResult<()> {
        self.log.borrow_mut().push(format!("visible:{visible}"));
        Ok(())
    }

    fn show_guest(&mut self, id: &GuestId, _guest: &GuestRef) -> LayerHostResult<()> {
        self.log.borrow_mut().push(format!("show:{id}"));
        Ok(())
    }

    fn clear_guest(&mut self, id: &GuestId, _guest: &GuestRef) -> LayerHostResult<()> {
        self.log.borrow_mut().push(format!("clear:{id}"));
        Ok(())
    }
}

struct Dialog {
    name: &'static str,
    attaches: Cell<u32>,
    detaches: Cell<u32>,
}

impl Dialog {
    fn new(name: &'static str) -> Rc<Self> {
        Rc::new(Self {
            name,
            attaches: Cell::new(0),
            detaches: Cell::new(0),
        })
    }
}

impl GuestContent for Dialog {
    fn guest_id(&self) -> Option<&str> {
        Some(self.name)
    }

    fn on_attach(&self) {
        self.attaches.set(self.attaches.get() + 1);
    }

    fn on_detach(&self) {
        self.detaches.set(self.detaches.get() + 1);
    }
}

fn surface_stack<V: Clone>(policy: UnmountPolicy) -> (OverlayStack<V>, Rc<RefCell<Vec<String>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let surface = RecordingSurface { log: log.clone() };
    (OverlayStack::with_policy(Box::new(surface), policy), log)
}

#[test]
fn test_nested_dialog_walkthrough() {
    let (mut stack, log) = surface_stack::<String>(UnmountPolicy::UnmountWhenEmpty);
    let settings = Dialog::new("settings");
    let confirm = Dialog::new("confirm");
    let settings_ref: GuestRef = settings.clone();
    let confirm_ref: GuestRef = confirm.clone();

    let settings_handle = stack.open(&settings_ref).unwrap();
    assert!(stack.visible());
    assert_eq!(stack.top().unwrap().id().to_string(), "settings");

    let confirm_handle = stack.open(&confirm_ref).unwrap();
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.top().unwrap().id().to_string(), "confirm");
    assert_eq!(stack.host().attached().unwrap().to_string(), "confirm");

    stack.close(&confirm_ref, "discard".to_owned()).unwrap();
    assert_eq!(confirm_handle.try_value(), Some("discard".to_owned()));
    assert_eq!(settings_handle.try_value(), None);
    assert_eq!(stack.top().unwrap().id().to_string(), "settings");

    stack.close(&settings_ref, "saved".to_owned()).unwrap();
    assert_eq!(settings_handle.try_value(), Some("saved".to_owned()));
    assert!(stack.is_empty());
    assert!(!stack.visible());

    assert_eq!(
        *log.borrow(),
        [
            "mount",
            "visible:true",
            "show:settings",
            "clear:settings",
            "show:confirm",
            "clear:confirm",
            "show:settings",
            "clear:settings",
            "visible:false",
            "unmount",
        ]
    );
}

#[test]
fn test_host_is_untouched_until_first_open() {
    let (mut stack, log) = surface_stack::<&str>(UnmountPolicy::UnmountWhenEmpty);
    let dialog = Dialog::new("late");
    let dialog_ref: GuestRef = dialog.clone();

    assert!(log.borrow().is_empty());
    assert!(!stack.host().mounted());

    stack.open(&dialog_ref).unwrap();
    assert_eq!(log.borrow().first().map(String::as_str), Some("mount"));
    assert!(stack.host().mounted());
}

#[test]
fn test_keep_mounted_host_survives_an_empty_stack() {
    let (mut stack, log) = surface_stack::<&str>(UnmountPolicy::KeepMounted);
    let dialog = Dialog::new("sheet");
    let dialog_ref: GuestRef = dialog.clone();

    stack.open(&dialog_ref).unwrap();
    stack.close(&dialog_ref, "done").unwrap();
    stack.open(&dialog_ref).unwrap();

    let mounts = log
        .borrow()
        .iter()
        .filter(|entry| entry.as_str() == "mount")
        .count();
    assert_eq!(mounts, 1);
    assert!(!log.borrow().iter().any(|entry| entry.as_str() == "unmount"));
}

#[test]
fn test_hooks_stay_balanced_through_bury_and_reveal() {
    let (mut stack, _) = surface_stack::<&str>(UnmountPolicy::UnmountWhenEmpty);
    let wizard = Dialog::new("wizard");
    let picker = Dialog::new("picker");
    let wizard_ref: GuestRef = wizard.clone();
    let picker_ref: GuestRef = picker.clone();

    stack.open(&wizard_ref).unwrap();
    stack.open(&picker_ref).unwrap();
    stack.open(&wizard_ref).unwrap();
    stack.close(&wizard_ref, "done").unwrap();
    stack.close(&picker_ref, "done").unwrap();

    assert_eq!(wizard.attaches.get(), wizard.detaches.get());
    assert_eq!(picker.attaches.get(), picker.detaches.get());
    assert_eq!(wizard.attaches.get(), 2);
    assert_eq!(picker.attaches.get(), 2);
}

#[test]
fn test_cancel_and_pick_both_resolve() {
    let (mut stack, _) = surface_stack::<Option<String>>(UnmountPolicy::UnmountWhenEmpty);
    let prompt = Dialog::new("prompt");
    let prompt_ref: GuestRef = prompt.clone();

    let cancelled = stack.open(&prompt_ref).unwrap();
    stack.close(&prompt_ref, None).unwrap();
    assert_eq!(cancelled.try_value(), Some(None));

    let picked = stack.open(&prompt_ref).unwrap();
    stack
        .close(&prompt_ref, Some("option2".to_owned()))
        .unwrap();
    assert_eq!(picked.try_value(), Some(Some("option2".to_owned())));
    assert_eq!(cancelled.try_value(), Some(None));
}

#[tokio::test]
async fn test_every_awaiter_sees_the_close_value() {
    let (mut stack, _) = surface_stack::<String>(UnmountPolicy::UnmountWhenEmpty);
    let dialog = Dialog::new("chooser");
    let dialog_ref: GuestRef = dialog.clone();

    let handle = stack.open(&dialog_ref).unwrap();
    let mut first = handle.clone();
    let mut second = handle.clone();

    let first_task = tokio::spawn(async move { first.wait().await });
    let second_task = tokio::spawn(async move { second.wait().await });

    // Let both waiters park on a still-pending layer before it resolves.
    tokio::task::yield_now().await;
    stack.close(&dialog_ref, "chosen".to_owned()).unwrap();

    assert_eq!(first_task.await.unwrap(), Some("chosen".to_owned()));
    assert_eq!(second_task.await.unwrap(), Some("chosen".to_owned()));
}

#[tokio::test]
async fn test_waiting_on_a_buried_layer_resolves_on_its_close() {
    let (mut stack, _) = surface_stack::<String>(UnmountPolicy::UnmountWhenEmpty);
    let base = Dialog::new("base");
    let cover = Dialog::new("cover");
    let base_ref: GuestRef = base.clone();
    let cover_ref: GuestRef = cover.clone();

    let mut base_handle = stack.open(&base_ref).unwrap();
    stack.open(&cover_ref).unwrap();

    let waiter = tokio::spawn(async move { base_handle.wait().await });
    tokio::task::yield_now().await;

    // Closing the buried layer must not disturb the top.
    stack.close(&base_ref, "quietly".to_owned()).unwrap();
    assert_eq!(stack.top().unwrap().id().to_string(), "cover");
    assert_eq!(waiter.await.unwrap(), Some("quietly".to_owned()));
}
