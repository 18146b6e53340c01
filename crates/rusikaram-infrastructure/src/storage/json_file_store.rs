//! File-backed key-value store.
//!
//! All records live in a single JSON object on disk, keyed by
//! [`StorageKey`] wire names:
//!
//! ```text
//! {
//!   "customerDB":  { "9000000000": { "name": "...", "address": "..." } },
//!   "orders":      [ { "name": "...", "items": [...], ... } ],
//!   "currentForm": { ... }
//! }
//! ```
//!
//! Every commit is a locked read-modify-write of the whole document through
//! [`AtomicJsonFile::update`], so a batch touching several keys lands on disk
//! in one rename.

use chrono::Utc;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusikaram_core::error::{Result, RusikaramError};
use rusikaram_core::storage::{KeyValueStore, StorageKey, StoreOp};

use super::atomic_json::{AtomicJsonError, AtomicJsonFile};

type Document = Map<String, Value>;

pub struct JsonFileStore {
    file: AtomicJsonFile<Document>,
    /// Contents as of the last load or commit.
    document: Mutex<Document>,
}

impl JsonFileStore {
    /// Opens the store at `path`, reading the document once.
    ///
    /// A missing file starts an empty store. A file whose contents cannot be
    /// parsed is moved aside (see [`quarantine_path`]) and the store starts
    /// empty; only genuine I/O failures are returned as errors.
    pub fn open(path: PathBuf) -> Result<Self> {
        let file = AtomicJsonFile::<Document>::new(path);

        let document = match file.load() {
            Ok(document) => document.unwrap_or_default(),
            Err(AtomicJsonError::JsonError(e)) => {
                let moved_to = quarantine_path(file.path());
                tracing::warn!(
                    path = %file.path().display(),
                    moved_to = %moved_to.display(),
                    error = %e,
                    "Store file is corrupt, starting with an empty store"
                );
                fs::rename(file.path(), &moved_to)?;
                Document::new()
            }
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(path = %file.path().display(), keys = document.len(), "Opened store");

        Ok(Self {
            file,
            document: Mutex::new(document),
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Where a corrupt store file is moved: `<file>.corrupt-<UTC timestamp>`,
/// with a `-<n>` suffix when that name is already taken.
pub fn quarantine_path(path: &Path) -> PathBuf {
    let mut base = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    base.push(format!(".corrupt-{}", Utc::now().format("%Y%m%d%H%M%S%3f")));

    let mut candidate = path.with_file_name(&base);
    let mut attempt = 1u32;
    while candidate.exists() {
        let mut name = base.clone();
        name.push(format!("-{}", attempt));
        candidate = path.with_file_name(name);
        attempt += 1;
    }
    candidate
}

fn apply(document: &mut Document, batch: &[StoreOp]) {
    for op in batch {
        match op {
            StoreOp::Put(key, value) => {
                document.insert(key.as_str().to_string(), value.clone());
            }
            StoreOp::Delete(key) => {
                document.remove(key.as_str());
            }
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: StorageKey) -> Result<Option<Value>> {
        let document = self
            .document
            .lock()
            .map_err(|e| RusikaramError::internal(format!("Store lock poisoned: {}", e)))?;
        Ok(document.get(key.as_str()).cloned())
    }

    fn commit(&self, batch: Vec<StoreOp>) -> Result<()> {
        let mut document = self
            .document
            .lock()
            .map_err(|e| RusikaramError::internal(format!("Store lock poisoned: {}", e)))?;

        let next = self.file.update(Document::new(), |on_disk| {
            apply(on_disk, &batch);
            Ok(())
        })?;
        *document = next;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn store_path(dir: &TempDir) -> PathBuf {
        dir.path().join("store.json")
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(store_path(&dir)).unwrap();
        assert_eq!(store.get(StorageKey::Orders).unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(store_path(&dir)).unwrap();
        store.put(StorageKey::Orders, json!([{"name": "Asha"}])).unwrap();
        drop(store);

        let reopened = JsonFileStore::open(store_path(&dir)).unwrap();
        assert_eq!(
            reopened.get(StorageKey::Orders).unwrap(),
            Some(json!([{"name": "Asha"}]))
        );
    }

    #[test]
    fn test_batch_is_written_as_one_document() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(store_path(&dir)).unwrap();
        store.put(StorageKey::CurrentForm, json!({"name": "draft"})).unwrap();

        store
            .commit(vec![
                StoreOp::Put(StorageKey::Orders, json!([1])),
                StoreOp::Put(StorageKey::CustomerDb, json!({"9": {}})),
                StoreOp::Delete(StorageKey::CurrentForm),
            ])
            .unwrap();

        let on_disk: Value =
            serde_json::from_str(&fs::read_to_string(store_path(&dir)).unwrap()).unwrap();
        assert_eq!(on_disk, json!({"orders": [1], "customerDB": {"9": {}}}));
        assert!(!dir.path().join(".store.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_moved_aside() {
        let dir = TempDir::new().unwrap();
        fs::write(store_path(&dir), "{\"orders\": [").unwrap();

        let store = JsonFileStore::open(store_path(&dir)).unwrap();
        assert_eq!(store.get(StorageKey::Orders).unwrap(), None);
        assert!(!store_path(&dir).exists());

        let quarantined: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry
                    .file_name()
                    .to_string_lossy()
                    .starts_with("store.json.corrupt-")
            })
            .collect();
        assert_eq!(quarantined.len(), 1);
    }

    #[test]
    fn test_non_object_document_is_treated_as_corrupt() {
        let dir = TempDir::new().unwrap();
        fs::write(store_path(&dir), "[1, 2, 3]").unwrap();

        let store = JsonFileStore::open(store_path(&dir)).unwrap();
        assert_eq!(store.get(StorageKey::Orders).unwrap(), None);
    }

    #[test]
    fn test_repeated_corruption_keeps_every_copy() {
        let dir = TempDir::new().unwrap();

        for contents in ["{\"orders\": [", "not json"] {
            fs::write(store_path(&dir), contents).unwrap();
            JsonFileStore::open(store_path(&dir)).unwrap();
        }

        let mut kept: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry
                    .file_name()
                    .to_string_lossy()
                    .starts_with("store.json.corrupt-")
            })
            .map(|entry| fs::read_to_string(entry.path()).unwrap())
            .collect();
        kept.sort();
        assert_eq!(kept, vec!["not json", "{\"orders\": ["]);
    }

    #[test]
    fn test_quarantine_path_skips_taken_names() {
        let dir = TempDir::new().unwrap();
        let first = quarantine_path(&store_path(&dir));
        fs::write(&first, "old").unwrap();

        let second = quarantine_path(&store_path(&dir));

        assert_ne!(first, second);
        assert!(!second.exists());
    }

    #[test]
    fn test_quarantine_path_keeps_file_name() {
        let path = quarantine_path(Path::new("/data/store.json"));
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("store.json.corrupt-"));
        assert_eq!(path.parent(), Some(Path::new("/data")));
    }
}
