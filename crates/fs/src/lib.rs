mod error;
mod record;
mod walker;
mod window;

pub use error::WalkError;
pub use record::FileRecord;
pub use walker::walk;
pub use window::{DateParseError, TimeWindow, parse_date, parse_date_lenient};
