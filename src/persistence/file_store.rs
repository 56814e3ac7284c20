//! Key-value store kept as one JSON document on disk

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};

use super::KeyValueStore;

const STORAGE_FILE: &str = "storage.json";

/// All entries live in memory and the whole document is rewritten on every
/// change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open `storage.json` in `dir`.
    ///
    /// A missing file is an empty store. A malformed document is logged and
    /// replaced by an empty store; it is overwritten by the next change.
    pub fn open(dir: &Path) -> StoreResult<Self> {
        let path = dir.join(STORAGE_FILE);
        let entries = match Self::load(&path) {
            Ok(entries) => entries,
            Err(e @ StoreError::Malformed { .. }) => {
                tracing::warn!(error = %e, "Ignoring malformed storage document");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> StoreResult<BTreeMap<String, String>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write `entries` as the whole document. The caller adopts them only
    /// once this succeeds, so a failed write leaves the store unchanged.
    fn flush(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(io_err)?;
            }
        }

        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, content).map_err(io_err)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)?;
        self.entries = entries;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut entries = self.entries.clone();
        entries.remove(key);
        self.flush(&entries)?;
        self.entries = entries;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data").join("bookclub");

        let mut store = FileStore::open(&nested).unwrap();
        store.set("greeting", "merhaba").unwrap();
        store.set("empty", "").unwrap();
        assert!(store.path().exists());

        let reopened = FileStore::open(&nested).unwrap();
        assert_eq!(reopened.get("greeting").unwrap().as_deref(), Some("merhaba"));
        assert_eq!(reopened.get("empty").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_remove_persists() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("a", "1").unwrap();
        store.remove("a").unwrap();
        store.remove("never-set").unwrap();

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("a").unwrap(), None);
    }

    #[test]
    fn test_malformed_document_is_replaced() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(STORAGE_FILE), "not json at all").unwrap();

        let mut store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("a").unwrap(), None);

        store.set("a", "1").unwrap();
        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("a").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_unreadable_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        // A directory where the document should be cannot be read as a file.
        fs::create_dir_all(dir.path().join(STORAGE_FILE)).unwrap();
        assert!(matches!(
            FileStore::open(dir.path()),
            Err(StoreError::Io { .. })
        ));
    }

    #[test]
    fn test_failed_set_leaves_store_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("search", "kept").unwrap();

        // Swap the document for a directory so the next write fails.
        fs::remove_file(store.path()).unwrap();
        fs::create_dir_all(store.path()).unwrap();

        assert!(matches!(
            store.set("search", "rejected"),
            Err(StoreError::Io { .. })
        ));
        assert!(store.set("category", "Roman").is_err());
        assert_eq!(store.get("search").unwrap().as_deref(), Some("kept"));
        assert_eq!(store.get("category").unwrap(), None);

        // The rejected values must not ride along with a later write.
        fs::remove_dir(store.path()).unwrap();
        store.set("favorites", "[]").unwrap();

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("search").unwrap().as_deref(), Some("kept"));
        assert_eq!(reopened.get("category").unwrap(), None);
        assert_eq!(reopened.get("favorites").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_failed_remove_keeps_entry() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("a", "1").unwrap();

        fs::remove_file(store.path()).unwrap();
        fs::create_dir_all(store.path()).unwrap();

        assert!(store.remove("a").is_err());
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
    }
}
