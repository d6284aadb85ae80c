use layerhost_core::{GuestContent, GuestRef, LoggingHostBackend, OverlayStack};
use std::rc::Rc;
use tokio::task::LocalSet;

struct Prompt;

impl GuestContent for Prompt {
    fn guest_id(&self) -> Option<&str> {
        Some("prompt")
    }
}

fn main() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Error building runtime");

    let local = LocalSet::new();
    runtime.block_on(local.run_until(async {
        let mut stack: OverlayStack<String> = OverlayStack::new(Box::new(LoggingHostBackend));
        let prompt: GuestRef = Rc::new(Prompt);

        let mut handle = stack.open(&prompt).expect("Error opening overlay");

        // Several handles can wait on the same layer; all of them see the
        // value picked at close time.
        let mut observer = handle.clone();
        let waiter = tokio::task::spawn_local(async move {
            let value = observer.wait().await;
            println!("observer task saw: {:?}", value);
            value
        });

        stack
            .close(&prompt, "confirmed".to_owned())
            .expect("Error closing overlay");

        println!("caller saw: {:?}", handle.wait().await);

        let observed = waiter.await.expect("observer task failed");
        assert_eq!(observed, Some("confirmed".to_owned()));
    }));
}
