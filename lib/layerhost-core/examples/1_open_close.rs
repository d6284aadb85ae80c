use layerhost_core::{GuestContent, GuestRef, LoggingHostBackend, OverlayStack};
use std::rc::Rc;

struct Note;

impl GuestContent for Note {
    fn guest_id(&self) -> Option<&str> {
        Some("note")
    }
}

fn main() {
    let mut stack: OverlayStack<&str> = OverlayStack::new(Box::new(LoggingHostBackend));
    let note: GuestRef = Rc::new(Note);

    let handle = stack.open(&note).expect("Error opening overlay");
    println!(
        "opened: visible={}, depth={}, top={:?}",
        stack.visible(),
        stack.len(),
        stack.top().map(|layer| layer.id().to_string()),
    );

    stack.close(&note, "done").expect("Error closing overlay");
    println!(
        "closed: visible={}, value={:?}",
        stack.visible(),
        handle.try_value(),
    );
}
