use crate::console_host::ConsoleHost;
use layerhost_core::hotkey::{HotkeyMap, KeyCombo};
use layerhost_core::{Config, GuestContent, GuestRef, LayerHostResult, OverlayStack};
use log::{error, info};
use std::io::Write;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Drives the stack from a prompt. Guests are identified by the name you
/// type, so `open settings` twice moves the same layer back to the top.

struct NamedPanel {
    name: String,
}

impl GuestContent for NamedPanel {
    fn guest_id(&self) -> Option<&str> {
        Some(&self.name)
    }
}

type Stack = OverlayStack<Option<String>>;

fn panel(name: &str) -> GuestRef {
    Rc::new(NamedPanel {
        name: name.to_owned(),
    })
}

fn print_help() {
    println!("commands:");
    println!("  open <name>            open (or raise) the overlay <name>");
    println!("  close <name> [value]   close <name>, resolving with [value]");
    println!("  key <combo>            feed a key press, e.g. `key escape`");
    println!("  state                  show the stack bottom to top");
    println!("  quit                   leave the demo");
}

fn print_state(stack: &Stack) {
    let ids: Vec<String> = stack.ids().map(|id| id.to_string()).collect();
    println!(
        "stack: {:?}, visible: {}, mounted: {}",
        ids,
        stack.visible(),
        stack.host().mounted(),
    );
}

fn open_panel(stack: &mut Stack, name: &str) {
    match stack.open(&panel(name)) {
        Ok(mut handle) => {
            let name = name.to_owned();
            tokio::task::spawn_local(async move {
                match handle.wait().await {
                    Some(value) => info!("'{name}' closed with {value:?}"),
                    None => info!("'{name}' went away unresolved"),
                }
            });
        }
        Err(e) => error!("open failed: {e}"),
    }
}

pub async fn run(interrupted: Arc<AtomicBool>) -> LayerHostResult<()> {
    let mut stack: Stack = OverlayStack::new(Box::new(ConsoleHost::new()));

    let mut hotkeys: HotkeyMap<Stack> = HotkeyMap::new();
    hotkeys.add_combo(Config::close_hotkey(), |stack| {
        match stack.close_top(None) {
            Ok(true) => info!("closed the top overlay"),
            Ok(false) => info!("nothing to close"),
            Err(e) => error!("close failed: {e}"),
        }
    });

    println!("interactive overlay stack (close hotkey: {})", Config::close_hotkey());
    print_help();

    let stdin = std::io::stdin();
    loop {
        if interrupted.load(Ordering::SeqCst) {
            break;
        }

        print!("> ");
        std::io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let bytes = stdin.read_line(&mut line).map_err(|e| e.to_string())?;
        if bytes == 0 {
            break;
        }

        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("open") => match parts.next() {
                Some(name) => open_panel(&mut stack, name),
                None => println!("usage: open <name>"),
            },
            Some("close") => match parts.next() {
                Some(name) => {
                    let rest: Vec<&str> = parts.collect();
                    let value = if rest.is_empty() {
                        None
                    } else {
                        Some(rest.join(" "))
                    };
                    if let Err(e) = stack.close(&panel(name), value) {
                        error!("close failed: {e}");
                    }
                }
                None => println!("usage: close <name> [value]"),
            },
            Some("key") => match parts.next() {
                Some(combo) => {
                    let press = KeyCombo::parse(combo).to_press();
                    if !hotkeys.handle(&mut stack, &press) {
                        println!("no binding for '{combo}'");
                    }
                }
                None => println!("usage: key <combo>"),
            },
            Some("state") => print_state(&stack),
            Some("help") => print_help(),
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command '{other}', try help"),
            None => {}
        }

        // Lets the waiters spawned by `open` report any resolutions.
        tokio::task::yield_now().await;
    }

    info!("leaving the interactive demo");
    Ok(())
}
