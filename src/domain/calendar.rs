//! Pure calendar arithmetic
//!
//! Building blocks for holiday rules and grid layout. Nothing here knows about
//! holidays or entries.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Weekday number with Sunday as 0 and Saturday as 6
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Format a date as `YYYY-MM-DD`
pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Last calendar day of the month (handles leap-year February)
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    // Reject month 0 / 13+ which the arithmetic above would otherwise accept
    NaiveDate::from_ymd_opt(year, month, 1)?;
    first_of_next.pred_opt()
}

/// The `n`th occurrence (1-based) of `weekday` in a month.
///
/// Finds the first matching day on or after the 1st and advances `n - 1`
/// weeks. Returns `None` when the month is invalid, `n` is zero, or the
/// result would spill into the next month.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<NaiveDate> {
    if n == 0 {
        return None;
    }

    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = (7 + weekday.num_days_from_sunday() - weekday_index(first)) % 7;
    let date = first + Duration::days((offset + (n - 1) * 7) as i64);

    (date.month() == month).then_some(date)
}

/// The last occurrence of `weekday` in a month
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    let last = last_day_of_month(year, month)?;
    let days_back = (7 + weekday_index(last) - weekday.num_days_from_sunday()) % 7;
    Some(last - Duration::days(days_back as i64))
}

/// Weekday substitute for a holiday that falls on a weekend.
///
/// Saturday moves to the previous Friday and Sunday to the next Monday.
/// Weekdays have no separate observed date.
pub fn observed_date(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.pred_opt(),
        Weekday::Sun => date.succ_opt(),
        _ => None,
    }
}
