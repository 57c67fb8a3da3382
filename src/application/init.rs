//! Initialize tracker use case

use crate::domain::Year;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, TrackerRepository};
use std::fs;
use std::path::Path;

/// Initialize a new tracker at the specified path.
pub fn init(path: &Path, year: Year) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Creates .oof-tracker/ with an empty storage file
    repo.initialize()?;

    let config = Config::new(year);
    repo.save_config(&config)?;

    tracing::info!(path = %path.display(), year = year.value(), "initialized tracker");
    println!("Initialized oof-tracker at {}", path.display());
    println!("Year: {}", year);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_nested_path() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("time").join("off");

        init(&target, Year::new(2027).unwrap()).unwrap();

        let repo = FileSystemRepository::new(target);
        assert!(repo.is_initialized());
        assert_eq!(repo.load_config().unwrap().year, Some(2027));
    }
}
