//! Error types for oof-tracker

use crate::domain::ImportError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tracker
#[derive(Debug, Error)]
pub enum OofError {
    #[error("Not an oof-tracker directory: {0}")]
    NotTrackerDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("{0} is not an editable workday")]
    NotEditable(String),

    #[error("Import failed: {0}.")]
    Import(#[from] ImportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl OofError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            OofError::NotTrackerDirectory(_) => 2,
            OofError::InvalidDate(_) => 3,
            OofError::Import(_) => 4,
            OofError::NotEditable(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            OofError::NotTrackerDirectory(path) => {
                format!(
                    "Not an oof-tracker directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'oof init' in this directory to start tracking\n\
                    • Navigate to an existing tracker directory\n\
                    • Set OOF_TRACKER_ROOT environment variable to your tracker path",
                    path.display()
                )
            }
            OofError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Dates use the form YYYY-MM-DD and must fall in the tracked year.\n\
                    Example: oof set 2026-01-02 8",
                    input
                )
            }
            OofError::NotEditable(date) => {
                format!(
                    "{} is not an editable workday\n\n\
                    Weekends and holidays cannot hold entries.\n\
                    Use 'oof holidays' to list this year's holidays",
                    date
                )
            }
            OofError::Config(msg) => {
                if msg.contains("Invalid year") {
                    format!("{}\n\nExample: oof config year 2027", msg)
                } else if msg.contains("Invalid theme mode") {
                    format!("{}\n\nExample: oof theme dark", msg)
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using OofError
pub type Result<T> = std::result::Result<T, OofError>;
