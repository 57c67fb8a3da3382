//! Export and import use cases

use crate::application::Session;
use crate::error::Result;
use crate::infrastructure::KeyValueStore;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// What happened to an import request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Entries were replaced; holds the number of imported entries
    Imported(usize),
    /// The file was valid but the user declined the replacement
    Canceled,
}

/// Write the export document to `path` and return the written path.
///
/// When `path` is `None` the default `oof-tracker-<year>.json` in the current
/// directory is used.
pub fn export_to_file<S: KeyValueStore>(
    session: &Session<S>,
    path: Option<&Path>,
) -> Result<PathBuf> {
    let target = match path {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(session.year().export_filename()),
    };

    let mut json = session.export_json(Utc::now())?;
    json.push('\n');
    fs::write(&target, json)?;

    tracing::info!(path = %target.display(), entries = session.entries().len(), "exported entries");
    Ok(target)
}

/// Read, validate and (after confirmation) apply an import file.
///
/// `confirm` is only asked once the file has passed validation. On any error
/// or a declined confirmation the session is left as it was.
pub fn import_from_file<S, F>(
    session: &mut Session<S>,
    path: &Path,
    confirm: F,
) -> Result<ImportOutcome>
where
    S: KeyValueStore,
    F: FnOnce(&Session<S>) -> Result<bool>,
{
    let text = fs::read_to_string(path)?;

    let imported = session.validate_import(&text).inspect_err(|e| {
        tracing::warn!(path = %path.display(), "rejected import: {}", e);
    })?;

    if !confirm(session)? {
        return Ok(ImportOutcome::Canceled);
    }

    let count = imported.len();
    session.replace_entries(imported)?;
    tracing::info!(path = %path.display(), entries = count, "imported entries");
    Ok(ImportOutcome::Imported(count))
}
