//! Entry store: hours off per date for one year

use crate::domain::entry::{validate_entry, EntryViolation, Hours};
use crate::domain::{HolidaySet, Totals};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Result of applying raw user input to a date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// Input was an integer; the clamped value is now stored
    Stored(Hours),
    /// Input was blank; the date no longer has an entry
    Cleared,
    /// Input was not an integer; nothing changed
    Ignored,
}

impl SetOutcome {
    /// Whether the store was (potentially) modified
    pub fn is_change(&self) -> bool {
        !matches!(self, SetOutcome::Ignored)
    }
}

/// First entry that failed strict validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    pub key: String,
    pub violation: EntryViolation,
}

/// Mapping from date to hours. Dates without an entry count as zero hours.
///
/// Serializes as a flat JSON object keyed by `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntryStore {
    entries: BTreeMap<NaiveDate, Hours>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore previously persisted entries, discarding anything invalid.
    ///
    /// Never fails: unparseable text or a non-object root yields an empty
    /// store, and bad pairs are dropped one by one.
    pub fn load(raw: &str, holidays: &HolidaySet) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Self::collect_valid(&map, holidays),
            Ok(_) => {
                tracing::warn!("stored entries are not a JSON object, starting empty");
                Self::new()
            }
            Err(e) => {
                tracing::warn!("stored entries are not valid JSON, starting empty: {}", e);
                Self::new()
            }
        }
    }

    /// Keep every valid pair, silently dropping the rest
    pub fn collect_valid(map: &Map<String, Value>, holidays: &HolidaySet) -> Self {
        let mut store = Self::new();

        for (key, value) in map {
            match validate_entry(key, value, holidays) {
                Ok((date, hours)) => {
                    store.entries.insert(date, hours);
                }
                Err(violation) => {
                    tracing::debug!(key = key.as_str(), %violation, "dropping stored entry");
                }
            }
        }

        store
    }

    /// Accept the map only if every pair is valid, reporting the first failure
    pub fn require_valid(
        map: &Map<String, Value>,
        holidays: &HolidaySet,
    ) -> std::result::Result<Self, RejectedEntry> {
        let mut store = Self::new();

        for (key, value) in map {
            let (date, hours) = validate_entry(key, value, holidays).map_err(|violation| {
                RejectedEntry {
                    key: key.clone(),
                    violation,
                }
            })?;
            store.entries.insert(date, hours);
        }

        Ok(store)
    }

    /// Apply raw input for a date.
    ///
    /// Blank input removes the entry, non-integers are ignored (the user may
    /// still be typing), and integers are clamped to 1..=8. The caller must
    /// only pass editable dates.
    pub fn set(&mut self, date: NaiveDate, raw: &str) -> SetOutcome {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            self.entries.remove(&date);
            return SetOutcome::Cleared;
        }

        match parse_integer(trimmed) {
            Some(value) => {
                let hours = Hours::clamped(value);
                self.entries.insert(date, hours);
                SetOutcome::Stored(hours)
            }
            None => SetOutcome::Ignored,
        }
    }

    pub fn get(&self, date: NaiveDate) -> Option<Hours> {
        self.entries.get(&date).copied()
    }

    /// Entries in date order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Hours)> + '_ {
        self.entries.iter().map(|(date, hours)| (*date, *hours))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all hours
    pub fn totals(&self) -> Totals {
        Totals::new(self.entries.values().map(|h| h.get() as u32).sum())
    }

    /// Compact JSON object used for persistence
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Parse trimmed input as an integer.
///
/// Accepts plain integers of any size, unsigned `0x`/`0o`/`0b` literals and
/// numeric forms that denote an integer (`5.0`, `1e1`). Huge values
/// saturate, which clamping absorbs.
fn parse_integer(input: &str) -> Option<i64> {
    if let Ok(value) = input.parse::<i64>() {
        return Some(value);
    }

    if let Some(value) = parse_radix_literal(input) {
        return Some(value);
    }

    let value: f64 = input.parse().ok()?;
    (value.is_finite() && value.fract() == 0.0).then_some(value as i64)
}

fn parse_radix_literal(input: &str) -> Option<i64> {
    let (radix, digits) = match input.get(..2)? {
        "0x" | "0X" => (16, &input[2..]),
        "0o" | "0O" => (8, &input[2..]),
        "0b" | "0B" => (2, &input[2..]),
        _ => return None,
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    Some(i64::from_str_radix(digits, radix).unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Year;
    use serde_json::json;

    fn holidays() -> HolidaySet {
        HolidaySet::for_year(Year::new(2026).unwrap())
    }

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, day).unwrap()
    }

    #[test]
    fn test_set_clamps_high() {
        let mut store = EntryStore::new();
        assert_eq!(store.set(d(1, 2), "99"), SetOutcome::Stored(Hours::clamped(8)));
        assert_eq!(store.get(d(1, 2)).unwrap().get(), 8);
    }

    #[test]
    fn test_set_clamps_low() {
        let mut store = EntryStore::new();
        store.set(d(1, 2), "0");
        assert_eq!(store.get(d(1, 2)).unwrap().get(), 1);
        store.set(d(1, 2), "-4");
        assert_eq!(store.get(d(1, 2)).unwrap().get(), 1);
    }

    #[test]
    fn test_set_blank_removes() {
        let mut store = EntryStore::new();
        store.set(d(1, 2), "4");
        assert_eq!(store.set(d(1, 2), "   "), SetOutcome::Cleared);
        assert!(store.get(d(1, 2)).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_non_integer_is_ignored() {
        let mut store = EntryStore::new();
        store.set(d(1, 2), "4");
        let before = store.clone();

        assert_eq!(store.set(d(1, 2), "abc"), SetOutcome::Ignored);
        assert_eq!(store.set(d(1, 2), "4.5"), SetOutcome::Ignored);
        assert_eq!(store.set(d(1, 2), "NaN"), SetOutcome::Ignored);
        assert_eq!(store, before);
    }

    #[test]
    fn test_set_integral_forms() {
        let mut store = EntryStore::new();
        store.set(d(1, 2), " 5.0 ");
        assert_eq!(store.get(d(1, 2)).unwrap().get(), 5);
        store.set(d(1, 2), "99999999999999999999999");
        assert_eq!(store.get(d(1, 2)).unwrap().get(), 8);
        store.set(d(1, 2), "+3");
        assert_eq!(store.get(d(1, 2)).unwrap().get(), 3);
    }

    #[test]
    fn test_set_radix_literals() {
        let mut store = EntryStore::new();
        store.set(d(1, 2), "0x10");
        assert_eq!(store.get(d(1, 2)).unwrap().get(), 8);
        store.set(d(1, 2), "0b11");
        assert_eq!(store.get(d(1, 2)).unwrap().get(), 3);
        store.set(d(1, 2), "0O7");
        assert_eq!(store.get(d(1, 2)).unwrap().get(), 7);
        store.set(d(1, 2), "0xffffffffffffffffffff");
        assert_eq!(store.get(d(1, 2)).unwrap().get(), 8);

        let before = store.clone();
        for raw in ["0x", "-0x5", "0b2", "0xg", "0z1"] {
            assert_eq!(store.set(d(1, 2), raw), SetOutcome::Ignored, "{}", raw);
        }
        assert_eq!(store, before);
    }

    #[test]
    fn test_load_drops_invalid_pairs() {
        let raw = json!({
            "2026-01-02": 8,
            "2026-01-05": 4,
            "2026-01-03": 4,
            "2026-01-01": 4,
            "2026-02-30": 4,
            "2025-01-02": 4,
            "2026-01-06": 0,
            "2026-01-07": "4",
            "garbage": 1
        })
        .to_string();

        let store = EntryStore::load(&raw, &holidays());
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(d(1, 2)).unwrap().get(), 8);
        assert_eq!(store.get(d(1, 5)).unwrap().get(), 4);
    }

    #[test]
    fn test_load_non_object_is_empty() {
        let holidays = holidays();
        assert!(EntryStore::load("[1,2,3]", &holidays).is_empty());
        assert!(EntryStore::load("null", &holidays).is_empty());
        assert!(EntryStore::load("{not json", &holidays).is_empty());
        assert!(EntryStore::load("", &holidays).is_empty());
    }

    #[test]
    fn test_require_valid_reports_first_failure() {
        let map = json!({"2026-01-02": 8, "2026-01-03": 4});
        let rejected =
            EntryStore::require_valid(map.as_object().unwrap(), &holidays()).unwrap_err();
        assert_eq!(rejected.key, "2026-01-03");
        assert_eq!(rejected.violation, EntryViolation::NotEditable);
    }

    #[test]
    fn test_totals() {
        let raw = r#"{"2026-01-02":8,"2026-01-05":4}"#;
        let store = EntryStore::load(raw, &holidays());
        let totals = store.totals();
        assert_eq!(totals.hours, 12);
        assert_eq!(totals.days_display(), "1.5");
    }

    #[test]
    fn test_to_json_is_flat_object() {
        let mut store = EntryStore::new();
        store.set(d(1, 5), "4");
        store.set(d(1, 2), "8");
        assert_eq!(store.to_json().unwrap(), r#"{"2026-01-02":8,"2026-01-05":4}"#);
    }

    #[test]
    fn test_persisted_json_loads_back() {
        let mut store = EntryStore::new();
        store.set(d(3, 10), "6");
        store.set(d(11, 30), "2");
        let reloaded = EntryStore::load(&store.to_json().unwrap(), &holidays());
        assert_eq!(reloaded, store);
    }
}
