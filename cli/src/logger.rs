use colored::*;
use layerhost_core::paths;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

pub struct DemoLogger {
    quiet: bool,
    verbose: bool,
    log_file: Mutex<Option<File>>,
}

impl DemoLogger {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        let log_file = paths::ensure_data_dir()
            .and_then(|_| paths::log_file_path())
            .and_then(|path| {
                match OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&path)
                {
                    Ok(file) => Some(file),
                    Err(e) => {
                        eprintln!("Warning: Failed to open log file at {:?}: {}", path, e);
                        None
                    }
                }
            });

        Self {
            quiet,
            verbose,
            log_file: Mutex::new(log_file),
        }
    }

    fn level_tag(level: Level) -> &'static str {
        match level {
            Level::Error => "[E]",
            Level::Warn => "[W]",
            Level::Info => "[I]",
            Level::Debug => "[D]",
            Level::Trace => "[T]",
        }
    }

    fn short_target<'a>(record: &Record<'a>) -> &'a str {
        record.target().split("::").last().unwrap_or(record.target())
    }

    fn format_log(&self, record: &Record) -> String {
        let tag = Self::level_tag(record.level());
        let target = format!("[{}]", Self::short_target(record)).dimmed();

        // Warnings and errors get the whole line colored; everything else
        // only colors the level tag.
        match record.level() {
            Level::Error => format!("{} {} {}", tag, target, record.args())
                .red()
                .bold()
                .to_string(),
            Level::Warn => format!("{} {} {}", tag, target, record.args())
                .yellow()
                .to_string(),
            Level::Info => format!("{} {} {}", tag.green().bold(), target, record.args()),
            Level::Debug => format!("{} {} {}", tag.blue().bold(), target, record.args()),
            Level::Trace => format!("{} {} {}", tag.white().dimmed(), target, record.args()),
        }
    }

    fn format_log_plain(&self, record: &Record) -> String {
        format!(
            "{} [{}] {}",
            Self::level_tag(record.level()),
            Self::short_target(record),
            record.args()
        )
    }
}

impl Log for DemoLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if self.quiet {
            metadata.level() <= Level::Info
        } else if self.verbose {
            metadata.level() <= Level::Trace
        } else {
            metadata.level() <= Level::Debug
        }
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{}", self.format_log(record));

            let plain_message = self.format_log_plain(record);
            if let Ok(mut file_opt) = self.log_file.lock() {
                if let Some(file) = file_opt.as_mut() {
                    let _ = writeln!(file, "{}", plain_message);
                    let _ = file.flush();
                }
            }
        }
    }

    fn flush(&self) {}
}

pub fn init_logger(quiet: bool, verbose: bool) -> Result<(), log::SetLoggerError> {
    let logger = DemoLogger::new(quiet, verbose);
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
