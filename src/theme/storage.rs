//! Durable key-value storage for the theme preference.
//!
//! [`FileStorage`] keeps a flat JSON object on disk, the command-line
//! counterpart of browser local storage:
//!
//! ```json
//! { "theme": "light" }
//! ```

use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Storage-related errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error when accessing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Storage file `{0}` is not valid JSON")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("Storage file `{0}` must contain a JSON object")]
    NotAnObject(PathBuf),
}

/// String key-value store.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// ============================================================================
// Memory Storage
// ============================================================================

/// In-memory storage that also records every write in order.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    writes: Mutex<Vec<(String, String)>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// All `(key, value)` writes so far, oldest first.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().clone()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.lock().insert(key.to_owned(), value.to_owned());
        self.writes.lock().push((key.to_owned(), value.to_owned()));
        Ok(())
    }
}

// ============================================================================
// File Storage
// ============================================================================

/// JSON-object file storage. A missing file reads as empty.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    // serializes read-modify-write cycles within the process
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(StorageError::Io(self.path.clone(), err)),
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(StorageError::NotAnObject(self.path.clone())),
            Err(err) => Err(StorageError::Json(self.path.clone(), err)),
        }
    }

    fn save(&self, map: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|err| StorageError::Io(parent.to_path_buf(), err))?;
        }
        let content = serde_json::to_string_pretty(map)
            .map_err(|err| StorageError::Json(self.path.clone(), err))?;
        fs::write(&self.path, content).map_err(|err| StorageError::Io(self.path.clone(), err))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock();
        Ok(self
            .load()?
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_owned))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock();
        let mut map = self.load()?;
        map.insert(key.to_owned(), Value::String(value.to_owned()));
        self.save(&map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_storage_records_writes() {
        let storage = MemoryStorage::new();
        storage.set("theme", "light").unwrap();
        storage.set("theme", "dark").unwrap();

        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(storage.get("other").unwrap(), None);
        assert_eq!(
            storage.writes(),
            vec![
                ("theme".to_string(), "light".to_string()),
                ("theme".to_string(), "dark".to_string()),
            ]
        );
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("storage.json"));
        assert_eq!(storage.get("theme").unwrap(), None);
    }

    #[test]
    fn test_file_storage_set_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".parlandim").join("storage.json");
        let storage = FileStorage::new(&path);

        storage.set("theme", "light").unwrap();

        assert!(path.exists());
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("light"));
        // a fresh handle sees the persisted value
        assert_eq!(
            FileStorage::new(&path).get("theme").unwrap().as_deref(),
            Some("light")
        );
    }

    #[test]
    fn test_file_storage_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{"lang": "pt-BR"}"#).unwrap();

        let storage = FileStorage::new(&path);
        storage.set("theme", "dark").unwrap();

        assert_eq!(storage.get("lang").unwrap().as_deref(), Some("pt-BR"));
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_storage_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{not json").unwrap();

        let err = FileStorage::new(&path).set("theme", "dark").unwrap_err();
        assert!(matches!(err, StorageError::Json(..)));
    }

    #[test]
    fn test_file_storage_not_an_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"["dark"]"#).unwrap();

        let err = FileStorage::new(&path).get("theme").unwrap_err();
        assert!(matches!(err, StorageError::NotAnObject(_)));
        assert!(err.to_string().contains("JSON object"));
    }
}
