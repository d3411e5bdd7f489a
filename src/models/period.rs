//! Year-month keys
//!
//! Every expense is dated to a month. The key is persisted as `"YYYY-MM"` and
//! the month filter compares keys for equality.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A calendar month, e.g. `2024-01`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: u32,
    month: u32,
}

impl YearMonth {
    /// Latest representable year; keys always have a four-digit year
    pub const MAX_YEAR: u32 = 9999;

    /// Create a year-month, checking that the month is 1-12 and the year 1-9999
    pub fn new(year: u32, month: u32) -> Result<Self, PeriodParseError> {
        if year == 0 || year > Self::MAX_YEAR {
            return Err(PeriodParseError::YearOutOfRange(year.to_string()));
        }
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// Build a key from separately entered year and month fields
    ///
    /// Both fields must be non-empty digit strings. The month may be entered
    /// with or without its leading zero.
    pub fn from_parts(year: &str, month: &str) -> Result<Self, PeriodParseError> {
        let year = parse_digits("year", year)?;
        let month = parse_digits("month", month)?;
        let year = u32::try_from(year).map_err(|_| PeriodParseError::YearOutOfRange(year.to_string()))?;
        let month = u32::try_from(month).map_err(|_| PeriodParseError::MonthOutOfRange(u32::MAX))?;
        Self::new(year, month)
    }

    /// The month containing today's local date
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year().clamp(1, Self::MAX_YEAR as i32) as u32,
            month: today.month(),
        }
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Parse a `"YYYY-MM"` key
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;
        if year.is_empty() || month.len() != 2 {
            return Err(PeriodParseError::InvalidFormat(s.to_string()));
        }
        Self::from_parts(year, month)
    }
}

fn parse_digits(field: &'static str, value: &str) -> Result<u64, PeriodParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(PeriodParseError::Empty(field));
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(PeriodParseError::NotNumeric {
            field,
            value: value.to_string(),
        });
    }
    value.parse().map_err(|_| match field {
        "month" => PeriodParseError::MonthOutOfRange(u32::MAX),
        _ => PeriodParseError::YearOutOfRange(value.to_string()),
    })
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{:04}-{:02}", self.year, self.month))
    }
}

impl FromStr for YearMonth {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = PeriodParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<YearMonth> for String {
    fn from(period: YearMonth) -> Self {
        period.to_string()
    }
}

/// Error type for year-month parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodParseError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{field} must be numeric, got '{value}'")]
    NotNumeric { field: &'static str, value: String },

    #[error("month must be between 1 and 12, got {0}")]
    MonthOutOfRange(u32),

    #[error("year must be between 1 and 9999, got {0}")]
    YearOutOfRange(String),

    #[error("invalid year-month '{0}' (expected YYYY-MM)")]
    InvalidFormat(String),
}
