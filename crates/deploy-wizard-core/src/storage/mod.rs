//! Key-value storage and the project store built on top of it.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  ProjectStore   │───▶│  KeyValueStore  │───▶│ SqliteStore /   │
//! │ (list/get/...)  │    │  (read/write)   │    │  MemoryStore    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! [`KeyValueStore`] is the seam tests substitute: the CLI persists through
//! [`SqliteStore`], tests usually run against [`MemoryStore`].

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::{
    db::Database,
    error::{Result, WizardError},
};

pub mod project_store;

pub use project_store::{ProjectStore, PROJECTS_KEY};

/// Synchronous key-value slot storage with no transactional guarantees.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing the previous value.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Durable slot storage in a SQLite file.
///
/// Each call opens its own connection, so the store is cheap to share across
/// threads.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Opens (and if necessary creates) the database at `path`.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::FileSystem` if the parent directory cannot be
    /// created and `WizardError::Database` if the schema cannot be applied.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| WizardError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }
        Database::new(&path)?;
        Ok(Self { path })
    }

    /// Location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for SqliteStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Database::new(&self.path)?.read_slot(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        Database::new(&self.path)?.write_slot(key, value)
    }
}

/// Volatile slot storage for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with one slot already populated.
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), value.into());
        Self {
            slots: Mutex::new(slots),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.slots.lock().map_err(|e| WizardError::Configuration {
            message: format!("Memory store lock poisoned: {e}"),
        })
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_memory_store_read_write() {
        let store = MemoryStore::new();
        assert_eq!(store.read("key").unwrap(), None);
        store.write("key", "value").unwrap();
        assert_eq!(store.read("key").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_memory_store_with_slot() {
        let store = MemoryStore::with_slot("key", "seeded");
        assert_eq!(store.read("key").unwrap().as_deref(), Some("seeded"));
    }

    #[test]
    fn test_sqlite_store_creates_parent_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested").join("wizard.db");

        let store = SqliteStore::open(&path).expect("Failed to open store");
        assert!(path.exists());
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn test_sqlite_store_persists_across_instances() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("wizard.db");

        SqliteStore::open(&path).unwrap().write("key", "value").unwrap();
        let reopened = SqliteStore::open(&path).unwrap();
        assert_eq!(reopened.read("key").unwrap().as_deref(), Some("value"));
    }
}
