//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{BlobStore, Config, DirBlobStore, ENTRIES_KEY};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let mut blobs = DirBlobStore::new(path.to_path_buf());
    blobs.initialize()?;

    let config = Config::default();
    config.save_to_dir(path)?;

    blobs.set(ENTRIES_KEY, "[]")?;

    println!("Initialized daybook journal at {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_structure() {
        let temp = TempDir::new().unwrap();

        init(temp.path()).unwrap();

        assert!(temp.path().join(".daybook").is_dir());
        assert!(temp.path().join(".daybook/config.toml").exists());
        assert_eq!(
            fs::read_to_string(temp.path().join(".daybook/entries.json")).unwrap(),
            "[]"
        );
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("journals/personal");

        init(&nested).unwrap();

        assert!(nested.join(".daybook").is_dir());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();

        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_err());
    }
}
