//! Which dates accept an hours entry

use crate::domain::calendar::is_weekend;
use crate::domain::HolidaySet;
use chrono::{Datelike, NaiveDate};

/// Whether `date`, shown in the grid for `grid_month`, accepts an entry.
///
/// Padding cells from adjacent months are never editable, nor are weekends
/// and holidays.
pub fn is_editable(date: NaiveDate, grid_month: u32, holidays: &HolidaySet) -> bool {
    date.month() == grid_month && !is_weekend(date) && !holidays.contains(date)
}

/// `is_editable` for a date shown in its own month
pub fn is_editable_date(date: NaiveDate, holidays: &HolidaySet) -> bool {
    is_editable(date, date.month(), holidays)
}
