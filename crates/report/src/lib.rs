mod error;
mod pipeline;
mod size;
mod sort;

pub use error::ReportError;
pub use pipeline::{Report, ReportConfig, build_report, truncate};
pub use size::format_size;
pub use sort::{SortMode, sort_records};
