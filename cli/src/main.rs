use colored::*;
use layerhost_core::{Config, LayerHostError, LayerHostResult};
use log::{error, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod cli;
mod console_host;
mod demos;
mod logger;

fn main() -> LayerHostResult<()> {
    let args = cli::parse_args();

    if let Err(e) = logger::init_logger(args.quiet, args.verbose) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if args.list_demos {
        println!("available demos:");
        for demo in demos::DEMOS {
            let name = format!("{:<12}", demo.name);
            println!("  {} {}", name.cyan().bold(), demo.description);
        }
        return Ok(());
    }

    let config = match Config::load(args.config_path.as_deref(), true) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            warn!("Continuing with the default configuration");
            Config::default()
        }
    };

    if args.open_config {
        let path = config
            .config_path
            .clone()
            .or_else(Config::default_config_path)
            .ok_or_else(|| LayerHostError::Config("no config file path available".to_owned()))?;
        info!("Opening config file: {}", path.display());
        open::that(&path).map_err(|e| {
            LayerHostError::Config(format!("could not open '{}': {e}", path.display()))
        })?;
        return Ok(());
    }

    Config::set_config(config);
    info!("layerhost {}", layerhost_core::version());

    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = interrupted.clone();
    ctrlc::set_handler(move || {
        println!("\nReceived Ctrl+C, shutting down...");
        interrupted_clone.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl+C handler");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to build runtime: {e}"))?;

    let local = tokio::task::LocalSet::new();
    runtime.block_on(local.run_until(demos::run_demo(&args.demo, interrupted)))
}
