//! A single time-off entry: an editable date and 1-8 hours

use crate::domain::editability::is_editable_date;
use crate::domain::HolidaySet;
use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Shape of an ISO date key: exactly `YYYY-MM-DD`
fn iso_date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap())
}

/// Hours off on one day, always within `Hours::MIN..=Hours::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Hours(u8);

impl Hours {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    /// Checked constructor
    pub fn new(value: i64) -> Option<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Some(Hours(value as u8))
        } else {
            None
        }
    }

    /// Saturating constructor
    pub fn clamped(value: i64) -> Self {
        Hours(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a `YYYY-MM-DD` key that must denote a real date in `year`.
///
/// Dates that do not exist (`2026-02-30`) and other years are rejected.
pub fn parse_iso_date(iso: &str, year: i32) -> Option<NaiveDate> {
    let caps = iso_date_regex().captures(iso)?;
    let y: i32 = caps[1].parse().ok()?;
    let m: u32 = caps[2].parse().ok()?;
    let d: u32 = caps[3].parse().ok()?;

    if y != year {
        return None;
    }

    NaiveDate::from_ymd_opt(y, m, d)
}

/// Interpret a JSON value as an integer.
///
/// Integral floats (`4.0`) count as integers; strings, booleans and
/// fractional numbers do not.
pub fn json_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }

    let f = value.as_f64()?;
    (f.is_finite() && f.fract() == 0.0 && f.abs() <= i64::MAX as f64).then_some(f as i64)
}

/// Why an entry was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntryViolation {
    #[error("not a valid date for the tracker year")]
    InvalidDate,

    #[error("hours must be an integer between 1 and 8")]
    InvalidHours,

    #[error("not an editable workday")]
    NotEditable,
}

/// Validate one raw `(key, value)` pair against the year's rules.
///
/// Shared by tolerant loading and strict import; only the aggregation differs.
pub fn validate_entry(
    key: &str,
    value: &Value,
    holidays: &HolidaySet,
) -> std::result::Result<(NaiveDate, Hours), EntryViolation> {
    let date = parse_iso_date(key, holidays.year().value()).ok_or(EntryViolation::InvalidDate)?;
    let hours = json_integer(value)
        .and_then(Hours::new)
        .ok_or(EntryViolation::InvalidHours)?;

    if !is_editable_date(date, holidays) {
        return Err(EntryViolation::NotEditable);
    }

    Ok((date, hours))
}
