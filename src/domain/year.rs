//! Tracker year and its validation rules

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Earliest supported year
pub const MIN_YEAR: i32 = 1970;
/// Latest supported year
pub const MAX_YEAR: i32 = 2100;
/// Year used when nothing valid is configured
pub const DEFAULT_YEAR: i32 = 2026;

/// The single calendar year a tracker session works on.
///
/// Always within `MIN_YEAR..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(i32);

impl Year {
    /// Create a year, returning `None` when it is out of range
    pub fn new(value: i64) -> Option<Self> {
        if (MIN_YEAR as i64..=MAX_YEAR as i64).contains(&value) {
            Some(Year(value as i32))
        } else {
            None
        }
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// Pick the first valid candidate, falling back to `DEFAULT_YEAR`.
    ///
    /// Candidates are raw strings (e.g. from the environment) followed by the
    /// configured integer. Invalid values are skipped and logged at warn.
    pub fn resolve(env_value: Option<&str>, configured: Option<i64>) -> Self {
        if let Some(raw) = env_value {
            match raw.parse::<Year>() {
                Ok(year) => return year,
                Err(e) => tracing::warn!(value = raw, "ignoring OOF_YEAR: {}", e),
            }
        }

        if let Some(value) = configured {
            match Year::new(value) {
                Some(year) => return year,
                None => tracing::warn!(value, "configured year out of range, using default"),
            }
        }

        Year::default()
    }

    /// Whether the date falls inside this year
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.0
    }

    /// Key under which this year's entries are persisted
    pub fn storage_key(self) -> String {
        format!("entries:{}", self.0)
    }

    /// Default file name for an export of this year
    pub fn export_filename(self) -> String {
        format!("oof-tracker-{}.json", self.0)
    }
}

impl Default for Year {
    fn default() -> Self {
        Year(DEFAULT_YEAR)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid year: '{}' is not an integer", s))?;

        Year::new(value).ok_or_else(|| {
            format!(
                "Invalid year: {} (must be between {} and {})",
                value, MIN_YEAR, MAX_YEAR
            )
        })
    }
}
