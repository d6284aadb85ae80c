use layerhost_core::{GuestContent, GuestRef, LoggingHostBackend, OverlayStack};
use std::rc::Rc;

struct Panel(&'static str);

impl GuestContent for Panel {
    fn guest_id(&self) -> Option<&str> {
        Some(self.0)
    }

    fn on_attach(&self) {
        println!("  -> {} is now on display", self.0);
    }

    fn on_detach(&self) {
        println!("  <- {} left the display", self.0);
    }
}

fn print_stack(stack: &OverlayStack<&str>) {
    let ids: Vec<String> = stack.ids().map(|id| id.to_string()).collect();
    println!("stack (bottom to top): {:?}", ids);
}

fn main() {
    let mut stack: OverlayStack<&str> = OverlayStack::new(Box::new(LoggingHostBackend));
    let settings: GuestRef = Rc::new(Panel("settings"));
    let confirm: GuestRef = Rc::new(Panel("confirm"));
    let about: GuestRef = Rc::new(Panel("about"));

    println!("opening settings, confirm, about:");
    stack.open(&settings).expect("Error opening overlay");
    stack.open(&confirm).expect("Error opening overlay");
    stack.open(&about).expect("Error opening overlay");
    print_stack(&stack);

    println!("reopening settings moves it to the top:");
    stack.open(&settings).expect("Error opening overlay");
    print_stack(&stack);

    println!("closing the top twice:");
    stack.close_top("dismissed").expect("Error closing overlay");
    stack.close_top("dismissed").expect("Error closing overlay");
    print_stack(&stack);

    stack.close_top("dismissed").expect("Error closing overlay");
    println!("stack empty, host visible: {}", stack.visible());
}
