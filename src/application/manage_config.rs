//! Config management use case

use crate::error::{OofError, Result};
use crate::infrastructure::{Config, FileSystemRepository, TrackerRepository};

/// Service for managing tracker configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "year" => Ok(config.effective_year().to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(OofError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: year, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "year" => {
                let year = config.set_year(value)?;
                tracing::info!(year = year.value(), "updated configured year");
            }
            "created" => {
                return Err(OofError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(OofError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: year",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
