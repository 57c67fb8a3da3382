//! Tracker session: the in-memory state for one year
//!
//! Owns the year, its holiday set and the entry store. Every mutation is
//! followed by an explicit `persist` to the key-value store.

use crate::domain::grid::year_grids;
use crate::domain::theme::THEME_STORAGE_KEY;
use crate::domain::transfer::parse_import;
use crate::domain::{
    is_editable_date, EntryStore, ExportDocument, HolidaySet, MonthGrid, SetOutcome, ThemeMode,
    Totals, Year,
};
use crate::error::{OofError, Result};
use crate::infrastructure::KeyValueStore;
use chrono::{DateTime, NaiveDate, Utc};

pub struct Session<S: KeyValueStore> {
    year: Year,
    holidays: HolidaySet,
    entries: EntryStore,
    storage: S,
}

impl<S: KeyValueStore> Session<S> {
    /// Open a session, restoring whatever valid entries are stored for `year`
    pub fn open(year: Year, storage: S) -> Result<Self> {
        let holidays = HolidaySet::for_year(year);
        let entries = match storage.get_item(&year.storage_key())? {
            Some(raw) => EntryStore::load(&raw, &holidays),
            None => EntryStore::new(),
        };

        tracing::info!(year = year.value(), entries = entries.len(), "opened session");

        Ok(Session {
            year,
            holidays,
            entries,
            storage,
        })
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    pub fn entries(&self) -> &EntryStore {
        &self.entries
    }

    pub fn totals(&self) -> Totals {
        self.entries.totals()
    }

    /// Grid for one month, or all twelve when `month` is `None`
    pub fn grids(&self, month: Option<u32>) -> Result<Vec<MonthGrid>> {
        match month {
            Some(m) => MonthGrid::build(m, &self.holidays)
                .map(|grid| vec![grid])
                .ok_or_else(|| OofError::Config(format!("Invalid month: {} (expected 1-12)", m))),
            None => Ok(year_grids(&self.holidays)),
        }
    }

    /// Parse a user-supplied date and make sure it belongs to this year
    pub fn parse_date(&self, input: &str) -> Result<NaiveDate> {
        let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
            .map_err(|_| OofError::InvalidDate(input.to_string()))?;

        if !self.year.contains(date) {
            return Err(OofError::InvalidDate(format!(
                "{} (tracked year is {})",
                input, self.year
            )));
        }

        Ok(date)
    }

    /// Apply raw input to an editable date and persist any change
    pub fn set_entry(&mut self, date: NaiveDate, raw: &str) -> Result<SetOutcome> {
        if !self.year.contains(date) || !is_editable_date(date, &self.holidays) {
            return Err(OofError::NotEditable(date.format("%Y-%m-%d").to_string()));
        }

        let outcome = self.entries.set(date, raw);
        if outcome.is_change() {
            self.persist()?;
        }

        tracing::info!(%date, ?outcome, "applied entry input");
        Ok(outcome)
    }

    /// Write the entry store under this year's key
    pub fn persist(&mut self) -> Result<()> {
        let json = self.entries.to_json()?;
        self.storage.set_item(&self.year.storage_key(), &json)
    }

    /// Export document text for the current entries
    pub fn export_json(&self, exported_at: DateTime<Utc>) -> Result<String> {
        let document = ExportDocument::new(self.year, &self.entries, exported_at);
        Ok(document.to_json_pretty()?)
    }

    /// Strictly validate a foreign export document. Leaves the session untouched.
    pub fn validate_import(&self, text: &str) -> Result<EntryStore> {
        Ok(parse_import(text, &self.holidays)?)
    }

    /// Replace all entries with an already validated store and persist
    pub fn replace_entries(&mut self, entries: EntryStore) -> Result<()> {
        self.entries = entries;
        self.persist()
    }

    pub fn theme_mode(&self) -> Result<ThemeMode> {
        let stored = self.storage.get_item(THEME_STORAGE_KEY)?;
        Ok(ThemeMode::from_stored(stored.as_deref()))
    }

    pub fn set_theme_mode(&mut self, mode: ThemeMode) -> Result<()> {
        self.storage.set_item(THEME_STORAGE_KEY, mode.as_str())
    }
}
