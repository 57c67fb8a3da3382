//! oof-tracker - Local time-off tracker
//!
//! Tracks hours off (1-8) per workday for a single calendar year, skipping
//! weekends and US holidays, with JSON export/import and a theme preference.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::OofError;
