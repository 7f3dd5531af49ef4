use std::sync::OnceLock;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::PROGRAM_LOG_LEVEL;

/// Stderr logger used by the `filetop` binary.
///
/// Prompts and the report go to stdout, so diagnostics stay on stderr
/// and never interleave with the listing.
pub struct Logger {
    level: Level,
}

impl Logger {
    fn format_line(&self, record: &Record<'_>) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        format!(
            "{} {} [{}] {}",
            timestamp,
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", self.format_line(record));
        }
    }

    fn flush(&self) {}
}

/// `off` is not a usable level for the logger, it falls back to the default.
fn parse_level(raw: &str) -> Option<Level> {
    raw.trim()
        .parse::<LevelFilter>()
        .ok()
        .and_then(|filter| filter.to_level())
}

fn get_level_from_env() -> Level {
    std::env::var(PROGRAM_LOG_LEVEL)
        .ok()
        .and_then(|s| parse_level(&s))
        .unwrap_or(Level::Warn)
}

pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(get_level_from_env())
}

pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    // Only the first call installs the logger; later calls must not move
    // the max level away from the level the logger was built with.
    let init_call = LOGGER.get().is_none();

    let logger = LOGGER.get_or_init(|| Logger { level });

    if init_call {
        log::set_logger(logger)?;
        log::set_max_level(logger.level.to_level_filter());
    }

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
