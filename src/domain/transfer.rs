//! Export document format and strict import validation

use crate::domain::entry::{json_integer, EntryViolation};
use crate::domain::{EntryStore, HolidaySet, Year};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Value of the `app` field in exported files
pub const APP_NAME: &str = "oof-tracker";
/// Value of the `version` field in exported files
pub const FORMAT_VERSION: &str = "1.0.0";

/// The exported JSON document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument<'a> {
    pub app: &'static str,
    pub version: &'static str,
    pub year: i32,
    pub exported_at: String,
    pub entries: &'a EntryStore,
}

impl<'a> ExportDocument<'a> {
    pub fn new(year: Year, entries: &'a EntryStore, exported_at: DateTime<Utc>) -> Self {
        ExportDocument {
            app: APP_NAME,
            version: FORMAT_VERSION,
            year: year.value(),
            exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            entries,
        }
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Why an imported file was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("JSON root must be an object")]
    RootNotObject,

    #[error("year mismatch, file year must be {0}")]
    YearMismatch(Year),

    #[error("missing entries object")]
    MissingEntries,

    #[error("invalid date {0}")]
    InvalidDate(String),

    #[error("invalid hours for {0}")]
    InvalidHours(String),

    #[error("{0} is not an editable workday")]
    NotEditable(String),
}

/// Validate an untrusted export document against the running year.
///
/// Fails on the first problem found, checking entries in file order; nothing
/// is returned unless every entry is valid. Unknown top-level fields are
/// ignored.
pub fn parse_import(
    text: &str,
    holidays: &HolidaySet,
) -> std::result::Result<EntryStore, ImportError> {
    let year = holidays.year();

    let payload = match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => map,
        _ => return Err(ImportError::RootNotObject),
    };

    let file_year = payload.get("year").and_then(json_integer);
    if file_year != Some(year.value() as i64) {
        return Err(ImportError::YearMismatch(year));
    }

    let entries = match payload.get("entries") {
        Some(Value::Object(entries)) => entries,
        _ => return Err(ImportError::MissingEntries),
    };

    EntryStore::require_valid(entries, holidays).map_err(|rejected| match rejected.violation {
        EntryViolation::InvalidDate => ImportError::InvalidDate(rejected.key),
        EntryViolation::InvalidHours => ImportError::InvalidHours(rejected.key),
        EntryViolation::NotEditable => ImportError::NotEditable(rejected.key),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use serde_json::json;

    fn holidays() -> HolidaySet {
        HolidaySet::for_year(Year::new(2026).unwrap())
    }

    fn sample_store() -> EntryStore {
        let mut store = EntryStore::new();
        store.set(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(), "8");
        store.set(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(), "4");
        store
    }

    #[test]
    fn test_export_document_fields() {
        let store = sample_store();
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap();
        let doc = ExportDocument::new(Year::new(2026).unwrap(), &store, at);

        let value: Value = serde_json::from_str(&doc.to_json_pretty().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "app": "oof-tracker",
                "version": "1.0.0",
                "year": 2026,
                "exportedAt": "2026-03-01T12:30:00.000Z",
                "entries": {"2026-01-02": 8, "2026-01-05": 4}
            })
        );
    }

    #[test]
    fn test_export_is_indented() {
        let store = EntryStore::new();
        let doc = ExportDocument::new(Year::new(2026).unwrap(), &store, Utc::now());
        let text = doc.to_json_pretty().unwrap();
        assert!(text.starts_with("{\n  \"app\": \"oof-tracker\""));
    }

    #[test]
    fn test_export_then_import_round_trips() {
        let store = sample_store();
        let doc = ExportDocument::new(Year::new(2026).unwrap(), &store, Utc::now());
        let imported = parse_import(&doc.to_json_pretty().unwrap(), &holidays()).unwrap();
        assert_eq!(imported, store);
    }

    #[test]
    fn test_import_root_must_be_object() {
        let holidays = holidays();
        assert_eq!(parse_import("[]", &holidays), Err(ImportError::RootNotObject));
        assert_eq!(parse_import("not json", &holidays), Err(ImportError::RootNotObject));
        assert_eq!(parse_import("42", &holidays), Err(ImportError::RootNotObject));
    }

    #[test]
    fn test_import_year_mismatch() {
        let holidays = holidays();
        let text = json!({"year": 2025, "entries": {}}).to_string();
        assert_eq!(
            parse_import(&text, &holidays),
            Err(ImportError::YearMismatch(Year::new(2026).unwrap()))
        );

        let text = json!({"year": "2026", "entries": {}}).to_string();
        assert!(matches!(
            parse_import(&text, &holidays),
            Err(ImportError::YearMismatch(_))
        ));

        let text = json!({"entries": {}}).to_string();
        assert!(matches!(
            parse_import(&text, &holidays),
            Err(ImportError::YearMismatch(_))
        ));
    }

    #[test]
    fn test_import_missing_entries() {
        let holidays = holidays();
        for entries in [json!(null), json!([]), json!("x"), json!(3)] {
            let text = json!({"year": 2026, "entries": entries}).to_string();
            assert_eq!(parse_import(&text, &holidays), Err(ImportError::MissingEntries));
        }
        let text = json!({"year": 2026}).to_string();
        assert_eq!(parse_import(&text, &holidays), Err(ImportError::MissingEntries));
    }

    #[test]
    fn test_import_names_offending_date() {
        let holidays = holidays();

        let text = json!({"year": 2026, "entries": {"2026-02-30": 4}}).to_string();
        assert_eq!(
            parse_import(&text, &holidays),
            Err(ImportError::InvalidDate("2026-02-30".to_string()))
        );

        let text = json!({"year": 2026, "entries": {"2026-01-02": 12}}).to_string();
        assert_eq!(
            parse_import(&text, &holidays),
            Err(ImportError::InvalidHours("2026-01-02".to_string()))
        );

        let text = json!({"year": 2026, "entries": {"2026-07-03": 4}}).to_string();
        assert_eq!(
            parse_import(&text, &holidays),
            Err(ImportError::NotEditable("2026-07-03".to_string()))
        );
    }

    #[test]
    fn test_import_reports_first_bad_entry_in_file_order() {
        let text = r#"{"year": 2026, "entries": {"2026-03-02": 99, "2026-01-03": 4}}"#;
        assert_eq!(
            parse_import(text, &holidays()),
            Err(ImportError::InvalidHours("2026-03-02".to_string()))
        );

        let text = r#"{"year": 2026, "entries": {"2026-01-03": 4, "2026-03-02": 99}}"#;
        assert_eq!(
            parse_import(text, &holidays()),
            Err(ImportError::NotEditable("2026-01-03".to_string()))
        );
    }

    #[test]
    fn test_import_ignores_extra_fields() {
        let text = json!({
            "app": "something-else",
            "year": 2026,
            "note": "hi",
            "entries": {"2026-01-02": 8}
        })
        .to_string();
        let store = parse_import(&text, &holidays()).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_import_error_messages() {
        assert_eq!(
            ImportError::YearMismatch(Year::new(2026).unwrap()).to_string(),
            "year mismatch, file year must be 2026"
        );
        assert_eq!(
            ImportError::NotEditable("2026-01-03".to_string()).to_string(),
            "2026-01-03 is not an editable workday"
        );
    }
}
