//! Key-value text storage
//!
//! A flat string-to-string map, persisted as one JSON object. Entries and the
//! theme preference live side by side under their own keys.

use crate::error::Result;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::ffi::OsString;
use std::path::PathBuf;

/// Durable string storage addressed by key
pub trait KeyValueStore {
    /// Read the value for `key`, if any
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Store backed by a single JSON file.
///
/// Every write rewrites the whole file synchronously.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(path: PathBuf) -> Self {
        FileKeyValueStore { path }
    }

    /// Create an empty store file if none exists yet
    pub fn create_if_missing(&self) -> Result<()> {
        if !self.path.exists() {
            fs::write(&self.path, "{}\n")?;
        }
        Ok(())
    }

    /// Where a corrupt store file is moved before it gets overwritten
    fn corrupt_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".corrupt");
        PathBuf::from(name)
    }

    /// Parse the store file; `None` when it exists but is not a JSON object
    fn parse_file(&self) -> Result<Option<BTreeMap<String, String>>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Some(BTreeMap::new())),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Map<String, Value>>(&contents) {
            Ok(map) => Ok(Some(
                map.into_iter()
                    .filter_map(|(key, value)| match value {
                        Value::String(text) => Some((key, text)),
                        _ => None,
                    })
                    .collect(),
            )),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "storage file is corrupt, treating as empty: {}",
                    e
                );
                Ok(None)
            }
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.parse_file()?.unwrap_or_default())
    }

    /// Current items for a write; a corrupt file is moved aside first
    fn read_for_write(&self) -> Result<BTreeMap<String, String>> {
        if let Some(items) = self.parse_file()? {
            return Ok(items);
        }

        let aside = self.corrupt_path();
        fs::rename(&self.path, &aside)?;
        tracing::warn!(path = %aside.display(), "moved corrupt storage file aside");
        Ok(BTreeMap::new())
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut contents = serde_json::to_string_pretty(items)?;
        contents.push('\n');
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let mut items = self.read_for_write()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)?;
        tracing::debug!(key, path = %self.path.display(), "stored item");
        Ok(())
    }
}

/// In-process store, used where nothing should touch the disk
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    items: BTreeMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
