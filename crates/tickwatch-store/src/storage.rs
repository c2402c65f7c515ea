//! String key-value storage capability.
//!
//! The stores in this crate never touch storage backends directly; they go
//! through [`Storage`] so tests can inject an in-memory fake and real
//! deployments can point the state file wherever they like.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::StoreError;

/// Synchronous string key-value store. Values are UTF-8 JSON documents.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable(String::from("storage mutex poisoned")))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable(String::from("storage mutex poisoned")))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable(String::from("storage mutex poisoned")))?;
        entries.remove(key);
        Ok(())
    }
}

/// State-file storage: one JSON object mapping keys to values.
///
/// The file is read once on open and rewritten whole on every mutation
/// (write-through). An absent or malformed file loads as an empty map so a
/// corrupted state never blocks startup.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl JsonFileStorage {
    /// Open storage at an explicit path.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "state file is malformed; starting empty");
                    HashMap::new()
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(error) => return Err(error.into()),
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Open storage at the default location.
    ///
    /// Resolution order: `$TICKWATCH_HOME/state.json`, then
    /// `$HOME/.tickwatch/state.json`, then `.tickwatch/state.json` relative
    /// to the working directory.
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(resolve_tickwatch_home().join("state.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        let encoded = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, encoded)?;
        Ok(())
    }
}

impl Storage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable(String::from("storage mutex poisoned")))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable(String::from("storage mutex poisoned")))?;
        entries.insert(key.to_owned(), value.to_owned());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable(String::from("storage mutex poisoned")))?;
        entries.remove(key);
        self.persist(&entries)
    }
}

/// Resolve the tickwatch home directory from environment or default.
fn resolve_tickwatch_home() -> PathBuf {
    if let Some(path) = env::var_os("TICKWATCH_HOME") {
        return PathBuf::from(path);
    }

    if let Some(home) = env::var_os("HOME") {
        return PathBuf::from(home).join(".tickwatch");
    }

    PathBuf::from(".tickwatch")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips() {
        let storage = MemoryStorage::new();
        assert!(storage.get("k").expect("get must succeed").is_none());

        storage.set("k", "\"v\"").expect("set must succeed");
        assert_eq!(storage.get("k").expect("get must succeed").as_deref(), Some("\"v\""));

        storage.remove("k").expect("remove must succeed");
        assert!(storage.get("k").expect("get must succeed").is_none());
    }

    #[test]
    fn file_storage_survives_reopen() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("state.json");

        {
            let storage = JsonFileStorage::open(&path).expect("open must succeed");
            storage.set("stockWatchlist", "[\"MSFT\"]").expect("set must succeed");
        }

        let reopened = JsonFileStorage::open(&path).expect("reopen must succeed");
        assert_eq!(
            reopened.get("stockWatchlist").expect("get must succeed").as_deref(),
            Some("[\"MSFT\"]")
        );
    }

    #[test]
    fn malformed_state_file_loads_empty() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("state.json");
        fs::write(&path, "{not json at all").expect("write fixture");

        let storage = JsonFileStorage::open(&path).expect("open must succeed");
        assert!(storage.get("stockWatchlist").expect("get must succeed").is_none());
    }

    #[test]
    fn missing_state_file_loads_empty() {
        let temp = tempfile::tempdir().expect("tempdir");
        let storage =
            JsonFileStorage::open(temp.path().join("nested").join("state.json")).expect("open");
        assert!(storage.get("user").expect("get must succeed").is_none());
    }
}
