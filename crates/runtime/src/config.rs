pub const PROGRAM_NAME: &str = "filetop";
pub const PROGRAM_LOG_LEVEL: &str = "FILETOP_LOG_LEVEL";

/// Format of the dates accepted for the modification-time window.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format used when rendering a file's modification time.
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Root used when the path prompt is answered with an empty line
pub const DEFAULT_SCAN_ROOT: &str = ".";
