use std::cmp::Ordering;

use filetop_fs::FileRecord;

use crate::error::ReportError;

/// Ordering applied to the collected records. Both orders are descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Largest files first.
    BySize,
    /// Most recently modified files first.
    ByRecency,
}

impl SortMode {
    /// Numeric selector shown in the sort menu.
    pub fn selector(self) -> i64 {
        match self {
            SortMode::BySize => 1,
            SortMode::ByRecency => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::BySize => "Files sorted by size",
            SortMode::ByRecency => "Files sorted by modification time",
        }
    }

    #[inline]
    pub fn compare(self, a: &FileRecord, b: &FileRecord) -> Ordering {
        match self {
            SortMode::BySize => b.size.cmp(&a.size),
            SortMode::ByRecency => b.modified.cmp(&a.modified),
        }
    }
}

impl TryFrom<i64> for SortMode {
    type Error = ReportError;

    fn try_from(selector: i64) -> Result<Self, Self::Error> {
        match selector {
            1 => Ok(SortMode::BySize),
            2 => Ok(SortMode::ByRecency),
            other => Err(ReportError::InvalidSelection(other)),
        }
    }
}

/// Stable sort, records that compare equal keep their traversal order.
pub fn sort_records(records: &mut [FileRecord], mode: SortMode) {
    records.sort_by(|a, b| mode.compare(a, b));
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
