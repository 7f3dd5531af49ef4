use filetop_fs::WalkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The filesystem walk hit an I/O error. No partial listing is produced.
    #[error(transparent)]
    Traversal(#[from] WalkError),

    /// The sort selector was neither 1 (size) nor 2 (modification time).
    #[error("invalid sort selection: {0} (expected 1 or 2)")]
    InvalidSelection(i64),
}
