//! File-based Key-Value Store Adapter
//!
//! Keeps every entry in a single YAML mapping on disk. Each write rewrites
//! the whole document through a temporary file and a rename, so a crash
//! mid-write leaves the previous document intact.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::ports::{KeyValueStore, StorageError};

/// File-backed key-value storage
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Create a store backed by the YAML file at `path`
    ///
    /// The file and its parent directories are created on first write.
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileKeyValueStore::new("./data/storefront.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let yaml = match fs::read_to_string(&self.path) {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };

        if yaml.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_yaml::from_str(&yaml).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| StorageError::Io(e.to_string()))?;
        }

        let yaml =
            serde_yaml::to_string(entries).map_err(|e| StorageError::Serialization(e.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, yaml).map_err(|e| StorageError::Io(e.to_string()))?;
        fs::rename(&temp, &self.path).map_err(|e| StorageError::Io(e.to_string()))?;

        Ok(())
    }

    fn update<F>(&self, apply: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read_entries()?;
        apply(&mut entries);
        self.write_entries(&entries)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_get_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("store.yaml"));

        assert_eq!(store.get("authToken").unwrap(), None);
    }

    #[test]
    fn test_file_store_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("store.yaml"));

        store.set("authToken", "mock-jwt-token").unwrap();

        assert_eq!(store.get("authToken").unwrap().as_deref(), Some("mock-jwt-token"));
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("store.yaml");

        FileKeyValueStore::new(&path)
            .set("userRatings", r#"{"1":4}"#)
            .unwrap();

        let reopened = FileKeyValueStore::new(&path);
        assert_eq!(
            reopened.get("userRatings").unwrap().as_deref(),
            Some(r#"{"1":4}"#)
        );
    }

    #[test]
    fn test_file_store_remove_keeps_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("store.yaml"));

        store.set("authToken", "t").unwrap();
        store.set("userRatings", "{}").unwrap();
        store.remove("authToken").unwrap();

        assert_eq!(store.get("authToken").unwrap(), None);
        assert_eq!(store.get("userRatings").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_file_store_remove_without_file_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.yaml");
        let store = FileKeyValueStore::new(&path);

        store.remove("authToken").unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn test_file_store_corrupt_file_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.yaml");
        fs::write(&path, "- just\n- a list\n").unwrap();

        let store = FileKeyValueStore::new(&path);

        assert!(matches!(store.get("k"), Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_file_store_empty_file_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.yaml");
        fs::write(&path, "").unwrap();

        let store = FileKeyValueStore::new(&path);

        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("store.yaml"));

        store.set("k", "v").unwrap();

        assert!(!store.temp_path().exists());
    }
}
