//! Month grid layout
//!
//! A month is laid out in Sunday-first weeks. The first and last week are
//! padded with days from the neighbouring months so every row has 7 cells.

use crate::domain::calendar::{last_day_of_month, weekday_index};
use crate::domain::editability::is_editable;
use crate::domain::{HolidaySet, Year};
use chrono::{Datelike, Duration, NaiveDate};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One day in a month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    /// False for padding days from adjacent months
    pub in_month: bool,
    pub editable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: Year,
    pub month: u32,
    pub weeks: Vec<[GridCell; 7]>,
}

impl MonthGrid {
    /// Lay out `month` (1-12) of the holiday set's year
    pub fn build(month: u32, holidays: &HolidaySet) -> Option<Self> {
        let year = holidays.year();
        let first = NaiveDate::from_ymd_opt(year.value(), month, 1)?;
        let last = last_day_of_month(year.value(), month)?;

        let grid_start = first - Duration::days(weekday_index(first) as i64);
        let grid_end = last + Duration::days(6 - weekday_index(last) as i64);

        let mut weeks = Vec::new();
        let mut cursor = grid_start;
        while cursor <= grid_end {
            let week: [GridCell; 7] = std::array::from_fn(|offset| {
                let date = cursor + Duration::days(offset as i64);
                GridCell {
                    date,
                    in_month: date.month() == month,
                    editable: is_editable(date, month, holidays),
                }
            });
            weeks.push(week);
            cursor += Duration::days(7);
        }

        Some(MonthGrid { year, month, weeks })
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// In-month cells in date order
    pub fn days(&self) -> impl Iterator<Item = &GridCell> {
        self.weeks.iter().flatten().filter(|cell| cell.in_month)
    }
}

/// Grids for all twelve months
pub fn year_grids(holidays: &HolidaySet) -> Vec<MonthGrid> {
    (1..=12)
        .filter_map(|month| MonthGrid::build(month, holidays))
        .collect()
}
