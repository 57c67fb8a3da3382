//! Output formatting utilities

use crate::domain::calendar::to_iso;
use crate::domain::{EntryStore, HolidaySet, MonthGrid, Totals};
use chrono::Datelike;

const WEEKDAY_HEADER: &str = " Su  Mo  Tu  We  Th  Fr  Sa";

/// Render one month: a day-number row and an hours row per week.
///
/// Hours row: entered hours, `.` for an empty workday, `-` for weekends and
/// holidays, blank for padding days.
pub fn format_month(grid: &MonthGrid, entries: &EntryStore) -> String {
    let mut output = format!("{} {}\n{}\n", grid.name(), grid.year, WEEKDAY_HEADER);

    for week in &grid.weeks {
        let mut days = String::new();
        let mut hours = String::new();

        for cell in week {
            if !cell.in_month {
                days.push_str("    ");
                hours.push_str("    ");
                continue;
            }

            days.push_str(&format!("{:>3} ", cell.date.day()));
            let mark = if !cell.editable {
                "-".to_string()
            } else {
                entries
                    .get(cell.date)
                    .map(|h| h.to_string())
                    .unwrap_or_else(|| ".".to_string())
            };
            hours.push_str(&format!("{:>3} ", mark));
        }

        output.push_str(days.trim_end());
        output.push('\n');
        output.push_str(hours.trim_end());
        output.push('\n');
    }

    let month_hours: u32 = grid
        .days()
        .filter_map(|cell| entries.get(cell.date))
        .map(|h| h.get() as u32)
        .sum();
    output.push_str(&format!("Hours: {}\n", month_hours));

    output
}

/// Format totals for display
pub fn format_totals(totals: &Totals) -> String {
    format!(
        "Total hours: {}\nTotal days: {}\n",
        totals.hours,
        totals.days_display()
    )
}

/// Format the holiday list, one per line
pub fn format_holidays(holidays: &HolidaySet) -> String {
    let mut output = String::new();
    for holiday in holidays.iter() {
        let suffix = if holiday.observed { " (observed)" } else { "" };
        output.push_str(&format!(
            "{}  {}  {}{}\n",
            to_iso(holiday.date),
            holiday.date.format("%a"),
            holiday.name,
            suffix
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Year;
    use chrono::NaiveDate;

    fn holidays() -> HolidaySet {
        HolidaySet::for_year(Year::new(2026).unwrap())
    }

    #[test]
    fn test_format_month_january() {
        let holidays = holidays();
        let grid = MonthGrid::build(1, &holidays).unwrap();
        let mut entries = EntryStore::new();
        entries.set(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(), "8");

        let output = format_month(&grid, &entries);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "January 2026");
        assert_eq!(lines[1], WEEKDAY_HEADER);
        // Jan 1 (Thu, holiday), Jan 2 (Fri, 8h), Jan 3 (Sat)
        assert_eq!(lines[2], "                  1   2   3");
        assert_eq!(lines[3], "                  -   8   -");
        assert_eq!(lines[4], "  4   5   6   7   8   9  10");
        assert_eq!(lines[5], "  -   .   .   .   .   .   -");
        assert_eq!(*lines.last().unwrap(), "Hours: 8");
    }

    #[test]
    fn test_format_month_skips_other_month_entries() {
        let holidays = holidays();
        let grid = MonthGrid::build(2, &holidays).unwrap();
        let mut entries = EntryStore::new();
        entries.set(NaiveDate::from_ymd_opt(2026, 1, 30).unwrap(), "8");

        let output = format_month(&grid, &entries);
        assert!(output.ends_with("Hours: 0\n"));
    }

    #[test]
    fn test_format_totals() {
        assert_eq!(
            format_totals(&Totals::new(12)),
            "Total hours: 12\nTotal days: 1.5\n"
        );
        assert_eq!(
            format_totals(&Totals::new(16)),
            "Total hours: 16\nTotal days: 2\n"
        );
    }

    #[test]
    fn test_format_holidays() {
        let output = format_holidays(&holidays());
        assert!(output.starts_with("2026-01-01  Thu  New Year's Day\n"));
        assert!(output.contains("2026-07-03  Fri  Independence Day (observed)\n"));
        assert!(output.contains("2026-11-27  Fri  Day after Thanksgiving\n"));
    }
}
