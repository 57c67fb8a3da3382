//! Configuration management

use crate::domain::Year;
use crate::error::{OofError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// Directory holding tracker state inside the tracker root
pub const TRACKER_DIR: &str = ".oof-tracker";
/// Config file name inside `TRACKER_DIR`
pub const CONFIG_FILE: &str = "config.toml";
/// Environment variable that overrides the configured year
pub const YEAR_ENV: &str = "OOF_YEAR";
/// Environment variable forcing the system dark-mode preference
pub const PREFERS_DARK_ENV: &str = "OOF_PREFERS_DARK";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Raw configured year; anything unusable falls back to the default
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: Option<i64>,
    pub created: DateTime<Utc>,
}

/// Accept any TOML value for `year`, keeping only integers
fn lenient_year<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<toml::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_integer()))
}

impl Config {
    /// Create a new config for a year
    pub fn new(year: Year) -> Self {
        Config {
            year: Some(year.value() as i64),
            created: Utc::now(),
        }
    }

    /// Load config from .oof-tracker/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(TRACKER_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                OofError::NotTrackerDirectory(path.to_path_buf())
            } else {
                OofError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| OofError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .oof-tracker/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let tracker_dir = path.join(TRACKER_DIR);
        let config_path = tracker_dir.join(CONFIG_FILE);

        if !tracker_dir.exists() {
            fs::create_dir(&tracker_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| OofError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Year the session runs on: `OOF_YEAR`, then the configured year, then
    /// the default
    pub fn effective_year(&self) -> Year {
        let env_year = std::env::var(YEAR_ENV).ok();
        Year::resolve(env_year.as_deref(), self.year)
    }

    /// Set the configured year, rejecting anything out of range
    pub fn set_year(&mut self, raw: &str) -> Result<Year> {
        let year: Year = raw.parse().map_err(OofError::Config)?;
        self.year = Some(year.value() as i64);
        Ok(year)
    }
}

/// Whether the system prefers a dark theme.
///
/// An explicit `OOF_PREFERS_DARK` wins; otherwise the background field of
/// `COLORFGBG` (as set by many terminals) decides. Defaults to light.
pub fn system_prefers_dark() -> bool {
    let explicit = std::env::var(PREFERS_DARK_ENV).ok();
    let colorfgbg = std::env::var("COLORFGBG").ok();
    prefers_dark(explicit.as_deref(), colorfgbg.as_deref())
}

fn prefers_dark(explicit: Option<&str>, colorfgbg: Option<&str>) -> bool {
    if let Some(value) = explicit {
        match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "dark" => return true,
            "0" | "false" | "no" | "light" => return false,
            other => tracing::warn!(value = other, "ignoring {}", PREFERS_DARK_ENV),
        }
    }

    colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .map(|bg| bg <= 6 || bg == 8)
        .unwrap_or(false)
}
