//! Hour and day totals

/// Hours in one full day off
pub const HOURS_PER_DAY: u32 = 8;

/// Totals over an entry store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub hours: u32,
}

impl Totals {
    pub fn new(hours: u32) -> Self {
        Totals { hours }
    }

    pub fn days(&self) -> f64 {
        self.hours as f64 / HOURS_PER_DAY as f64
    }

    /// Days rounded to three decimals without trailing zeros
    pub fn days_display(&self) -> String {
        format_days(self.days())
    }
}

/// Format to three decimals, dropping trailing zeros and a bare point
pub fn format_days(value: f64) -> String {
    let fixed = format!("{:.3}", value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
