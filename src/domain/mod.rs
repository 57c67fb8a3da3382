//! Domain layer - Calendar rules and time-off entries

pub mod calendar;
pub mod editability;
pub mod entry;
pub mod grid;
pub mod holidays;
pub mod store;
pub mod theme;
pub mod totals;
pub mod transfer;
pub mod year;

pub use editability::{is_editable, is_editable_date};
pub use entry::{EntryViolation, Hours};
pub use grid::MonthGrid;
pub use holidays::HolidaySet;
pub use store::{EntryStore, SetOutcome};
pub use theme::{Theme, ThemeMode};
pub use totals::Totals;
pub use transfer::{ExportDocument, ImportError};
pub use year::Year;
