use colored::*;
use layerhost_core::{Config, GuestId, GuestRef, HostBackend, LayerHostResult};

/// Paints host transitions to the terminal. The closest a console gets to a
/// dimmed backdrop with a centered dialog, but the call sequence is the same
/// one a real surface would see.
pub struct ConsoleHost {
    frame_width: usize,
}

impl ConsoleHost {
    pub fn new() -> Self {
        Self { frame_width: 46 }
    }
}

impl HostBackend for ConsoleHost {
    fn mount(&mut self) -> LayerHostResult<()> {
        let (r, g, b) = Config::backdrop_color();
        let opacity = Config::backdrop_opacity();
        println!(
            "{}",
            format!("(host mounted: backdrop rgba({r}, {g}, {b}, {opacity}))").dimmed()
        );
        Ok(())
    }

    fn unmount(&mut self) -> LayerHostResult<()> {
        println!("{}", "(host unmounted)".dimmed());
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) -> LayerHostResult<()> {
        if visible {
            println!("{}", "\u{2591}".repeat(self.frame_width).dimmed());
        } else {
            println!("{}", "(backdrop hidden)".dimmed());
        }
        Ok(())
    }

    fn show_guest(&mut self, id: &GuestId, _guest: &GuestRef) -> LayerHostResult<()> {
        let label = format!(" {id} ");
        let pad = self.frame_width.saturating_sub(label.len() + 2) / 2;
        println!(
            "{}{}{}",
            "\u{2591}".repeat(pad).dimmed(),
            format!("[{label}]").cyan().bold(),
            "\u{2591}".repeat(pad).dimmed(),
        );
        Ok(())
    }

    fn clear_guest(&mut self, id: &GuestId, _guest: &GuestRef) -> LayerHostResult<()> {
        println!("{}", format!("(cleared {id})").dimmed());
        Ok(())
    }
}
