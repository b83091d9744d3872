//! Key-value blob persistence adapter

use crate::error::{DaybookError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed key holding the JSON-serialized entry collection
pub const ENTRIES_KEY: &str = "entries.json";

/// Fixed key holding the dark-mode preference ("true"/"false")
pub const DARK_MODE_KEY: &str = "dark_mode";

/// Durable key-value blob store backing the entry collection and the
/// theme preference. Reads return None for keys never written.
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Directory-backed implementation: one file per key under `<root>/.daybook/`
#[derive(Debug, Clone)]
pub struct DirBlobStore {
    pub root: PathBuf,
}

impl DirBlobStore {
    /// Create a store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        DirBlobStore { root }
    }

    /// Discover the journal root by walking up from the current directory.
    /// Checks the DAYBOOK_ROOT environment variable first.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("DAYBOOK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_daybook_dir(&path) {
                return Ok(DirBlobStore::new(path));
            } else {
                return Err(DaybookError::Config(format!(
                    "DAYBOOK_ROOT is set to '{}' but no .daybook directory found. \
                    Run 'daybook init' in that directory or unset DAYBOOK_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the journal root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_daybook_dir(&current) {
                return Ok(DirBlobStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(DaybookError::NotDaybookDirectory(start.to_path_buf()));
                }
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_daybook_dir(&self.root)
    }

    /// Create the .daybook directory structure
    pub fn initialize(&self) -> Result<()> {
        let daybook_dir = self.root.join(".daybook");

        if daybook_dir.exists() {
            return Err(DaybookError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&daybook_dir)?;
        Ok(())
    }

    fn has_daybook_dir(path: &Path) -> bool {
        path.join(".daybook").is_dir()
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(".daybook").join(key)
    }
}

impl BlobStore for DirBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DaybookError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, value)?;
        Ok(())
    }
}

/// In-memory implementation for tests
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, e.g. with a corrupt blob
    pub fn with_blob(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.blobs.insert(key.to_string(), value.to_string());
        store
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
