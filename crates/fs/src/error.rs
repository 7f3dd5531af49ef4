use std::{io, path::PathBuf};

use thiserror::Error;

/// A filesystem failure that aborted a scan.
#[derive(Debug, Error)]
#[error("failed to read {}", path.display())]
pub struct WalkError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl WalkError {
    pub(crate) fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}
