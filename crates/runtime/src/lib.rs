mod config;
pub mod logging;

pub use config::{
    DATE_FORMAT, DEFAULT_SCAN_ROOT, DISPLAY_TIME_FORMAT, PROGRAM_LOG_LEVEL, PROGRAM_NAME,
};

pub use logging::init;
