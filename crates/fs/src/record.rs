use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One non-directory entry found during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    #[serde(rename = "path")]
    pub full_path: PathBuf,
    /// File name
    pub name: String,
    /// File size in bytes
    pub size: u64,
    /// File last modified time
    pub modified: DateTime<Utc>,
}
