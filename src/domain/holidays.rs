//! Holiday policy: which dates are days off for everyone

use crate::domain::calendar::{last_weekday_of_month, nth_weekday_of_month, observed_date};
use crate::domain::Year;
use chrono::{Duration, NaiveDate, Weekday};
use std::collections::BTreeMap;

/// How a holiday's date is derived from the year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// Same month/day every year; weekend dates also get an observed weekday
    Fixed { month: u32, day: u32 },
    /// The `n`th weekday of a month
    NthWeekday { month: u32, weekday: Weekday, n: u32 },
    /// The last weekday of a month
    LastWeekday { month: u32, weekday: Weekday },
    /// The day after the `n`th weekday of a month
    DayAfterNthWeekday { month: u32, weekday: Weekday, n: u32 },
}

/// A named holiday rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday {
    pub name: &'static str,
    pub rule: HolidayRule,
}

/// Holidays excluded from time-off entry
pub const HOLIDAYS: &[Holiday] = &[
    Holiday {
        name: "New Year's Day",
        rule: HolidayRule::Fixed { month: 1, day: 1 },
    },
    Holiday {
        name: "Martin Luther King Jr. Day",
        rule: HolidayRule::NthWeekday {
            month: 1,
            weekday: Weekday::Mon,
            n: 3,
        },
    },
    Holiday {
        name: "Presidents' Day",
        rule: HolidayRule::NthWeekday {
            month: 2,
            weekday: Weekday::Mon,
            n: 3,
        },
    },
    Holiday {
        name: "Memorial Day",
        rule: HolidayRule::LastWeekday {
            month: 5,
            weekday: Weekday::Mon,
        },
    },
    Holiday {
        name: "Independence Day",
        rule: HolidayRule::Fixed { month: 7, day: 4 },
    },
    Holiday {
        name: "Labor Day",
        rule: HolidayRule::NthWeekday {
            month: 9,
            weekday: Weekday::Mon,
            n: 1,
        },
    },
    Holiday {
        name: "Day after Thanksgiving",
        rule: HolidayRule::DayAfterNthWeekday {
            month: 11,
            weekday: Weekday::Thu,
            n: 4,
        },
    },
    Holiday {
        name: "Christmas Eve",
        rule: HolidayRule::Fixed { month: 12, day: 24 },
    },
    Holiday {
        name: "Christmas Day",
        rule: HolidayRule::Fixed { month: 12, day: 25 },
    },
];

/// One computed holiday date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayDate {
    pub date: NaiveDate,
    pub name: &'static str,
    pub observed: bool,
}

impl HolidayRule {
    /// Dates produced by this rule for a year, the actual date first
    pub fn dates(&self, year: i32) -> Vec<(NaiveDate, bool)> {
        match *self {
            HolidayRule::Fixed { month, day } => {
                let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                    return Vec::new();
                };
                let mut dates = vec![(date, false)];
                if let Some(observed) = observed_date(date) {
                    dates.push((observed, true));
                }
                dates
            }
            HolidayRule::NthWeekday { month, weekday, n } => {
                nth_weekday_of_month(year, month, weekday, n)
                    .map(|date| vec![(date, false)])
                    .unwrap_or_default()
            }
            HolidayRule::LastWeekday { month, weekday } => {
                last_weekday_of_month(year, month, weekday)
                    .map(|date| vec![(date, false)])
                    .unwrap_or_default()
            }
            HolidayRule::DayAfterNthWeekday { month, weekday, n } => {
                nth_weekday_of_month(year, month, weekday, n)
                    .map(|date| vec![(date + Duration::days(1), false)])
                    .unwrap_or_default()
            }
        }
    }
}

/// The holiday dates of one year.
///
/// Observed dates that coincide with another holiday collapse into a single
/// entry; the first rule to claim a date keeps its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    year: Year,
    dates: BTreeMap<NaiveDate, HolidayDate>,
}

impl HolidaySet {
    /// Compute the holiday set for a year
    pub fn for_year(year: Year) -> Self {
        let mut dates = BTreeMap::new();

        for holiday in HOLIDAYS {
            for (date, observed) in holiday.rule.dates(year.value()) {
                dates.entry(date).or_insert(HolidayDate {
                    date,
                    name: holiday.name,
                    observed,
                });
            }
        }

        tracing::debug!(year = year.value(), count = dates.len(), "computed holiday set");
        HolidaySet { year, dates }
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains_key(&date)
    }

    pub fn get(&self, date: NaiveDate) -> Option<&HolidayDate> {
        self.dates.get(&date)
    }

    /// Holidays in date order
    pub fn iter(&self) -> impl Iterator<Item = &HolidayDate> {
        self.dates.values()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
