use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use filetop_fs::{FileRecord, TimeWindow, walk};
use log::{debug, info};

use crate::{
    error::ReportError,
    sort::{SortMode, sort_records},
};

/// Everything one run needs, gathered before any scanning starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub root: PathBuf,
    /// Maximum number of records to keep.
    pub count: usize,
    pub sort: SortMode,
    /// Only honored for [`SortMode::ByRecency`].
    pub window: Option<TimeWindow>,
}

impl ReportConfig {
    pub fn new(
        root: impl Into<PathBuf>,
        count: usize,
        sort: SortMode,
        window: Option<TimeWindow>,
    ) -> Self {
        let window = match sort {
            SortMode::ByRecency => window,
            SortMode::BySize => None,
        };

        Self {
            root: root.into(),
            count,
            sort,
            window,
        }
    }
}

#[derive(Debug)]
pub struct Report {
    pub sort: SortMode,
    /// Number of records collected before truncation.
    pub total: usize,
    /// Sorted records, at most `count` of them.
    pub records: Vec<FileRecord>,
    /// Wall time spent walking and sorting.
    pub elapsed: Duration,
}

impl Report {
    pub fn is_truncated(&self) -> bool {
        self.total > self.records.len()
    }
}

/// Keep the first `n` records. Asking for more than there are is not an error.
pub fn truncate(mut records: Vec<FileRecord>, n: usize) -> Vec<FileRecord> {
    records.truncate(n);
    records
}

/// Walk, filter, sort and truncate according to `cfg`.
pub fn build_report(cfg: &ReportConfig) -> Result<Report, ReportError> {
    let start = Instant::now();

    let mut records = walk(&cfg.root, cfg.window.as_ref())?;
    let total = records.len();

    sort_records(&mut records, cfg.sort);
    let records = truncate(records, cfg.count);

    debug!(
        "[report] sorted {} records {:?}, kept {}",
        total,
        cfg.sort,
        records.len()
    );
    let elapsed = start.elapsed();
    info!(
        "[report] {:?} done in {:.2}ms",
        cfg.root,
        elapsed.as_secs_f64() * 1000.0
    );

    Ok(Report {
        sort: cfg.sort,
        total,
        records,
        elapsed,
    })
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
