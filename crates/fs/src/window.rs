use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use filetop_runtime::DATE_FORMAT;
use log::warn;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateParseError {
    #[error("expected a date formatted as YYYY-MM-DD, got {0:?}")]
    InvalidFormat(String),
}

/// Modification-time window used when files are ranked by recency.
///
/// Both bounds are inclusive: a file modified exactly at `from` or exactly at
/// `to` is kept. Bounds sit at midnight UTC of the entered day, so `to` only
/// admits the first instant of its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// Build a window from two `YYYY-MM-DD` strings. Malformed input does not
    /// fail, see [`parse_date_lenient`].
    pub fn from_dates(from: &str, to: &str) -> Self {
        Self::new(parse_date_lenient(from), parse_date_lenient(to))
    }

    #[inline]
    pub fn contains(&self, modified: DateTime<Utc>) -> bool {
        !(modified < self.from || modified > self.to)
    }

    /// A window whose start lies after its end. Nothing can match it.
    pub fn is_empty(&self) -> bool {
        self.from > self.to
    }
}

/// Parse `YYYY-MM-DD` into midnight UTC of that day.
pub fn parse_date(s: &str) -> Result<DateTime<Utc>, DateParseError> {
    let s = s.trim();
    let date = NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| DateParseError::InvalidFormat(s.to_owned()))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

/// Like [`parse_date`], but a malformed date becomes the Unix epoch instead of
/// an error. The run keeps going with the epoch as the boundary.
pub fn parse_date_lenient(s: &str) -> DateTime<Utc> {
    match parse_date(s) {
        Ok(dt) => dt,
        Err(e) => {
            warn!("[window] {e}; using {}", DateTime::<Utc>::UNIX_EPOCH);
            DateTime::<Utc>::UNIX_EPOCH
        }
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
