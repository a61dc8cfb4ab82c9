use crate::{Error, Result};
use chrono::NaiveDate;

/// One decoded access-log record
///
/// Produced by the line parser only when both `handler` and `response_time`
/// were present in the source line. The timestamp is kept verbatim; an absent
/// `@timestamp` field decodes to an empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: String,
    pub handler: String,
    pub response_time: f64,
}

impl LogRecord {
    /// The "YYYY-MM-DD" grouping key: the first 10 characters of the
    /// timestamp, or the whole string when it is shorter.
    pub fn date_key(&self) -> &str {
        match self.timestamp.char_indices().nth(10) {
            Some((idx, _)) => &self.timestamp[..idx],
            None => &self.timestamp,
        }
    }
}

/// Exact-match calendar-day filter for aggregation
///
/// Holds a validated "YYYY-MM-DD" string and compares it against each
/// record's date key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFilter(String);

impl DateFilter {
    /// Parse a date filter argument
    ///
    /// Accepts only the zero-padded YYYY-MM-DD shape (so "2025-6-22" is
    /// rejected even though it names a real day) and requires the value to be
    /// a valid calendar date.
    pub fn parse(value: &str) -> Result<Self> {
        let shaped = value.len() == 10
            && value.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !shaped {
            return Err(Error::InvalidDate(value.to_string()));
        }

        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| Error::InvalidDate(value.to_string()))?;

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if a record's date key matches this filter
    pub fn matches(&self, record: &LogRecord) -> bool {
        record.date_key() == self.0
    }
}
