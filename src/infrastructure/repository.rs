//! File system repository

use crate::error::{OofError, Result};
use crate::infrastructure::config::{Config, TRACKER_DIR};
use crate::infrastructure::FileKeyValueStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a tracker root
pub const ROOT_ENV: &str = "OOF_TRACKER_ROOT";
/// Storage file name inside `TRACKER_DIR`
pub const STORAGE_FILE: &str = "storage.json";

/// Abstract repository for tracker state
pub trait TrackerRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .oof-tracker/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .oof-tracker/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .oof-tracker directory exists
    fn is_initialized(&self) -> bool;

    /// Create .oof-tracker directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of TrackerRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover tracker root, checking OOF_TRACKER_ROOT before walking up from
    /// the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_tracker_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(OofError::Config(format!(
                    "{} is set to '{}' but no {} directory found. \
                    Run 'oof init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    TRACKER_DIR,
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover tracker root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_tracker_dir(&current) {
                tracing::debug!(root = %current.display(), "found tracker root");
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(OofError::NotTrackerDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_tracker_dir(path: &Path) -> bool {
        path.join(TRACKER_DIR).is_dir()
    }

    /// Key-value storage for entries and preferences
    pub fn storage(&self) -> FileKeyValueStore {
        FileKeyValueStore::new(self.root.join(TRACKER_DIR).join(STORAGE_FILE))
    }
}

impl TrackerRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_tracker_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let tracker_dir = self.root.join(TRACKER_DIR);

        if tracker_dir.exists() {
            return Err(OofError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&tracker_dir)?;
        self.storage().create_if_missing()
    }
}
