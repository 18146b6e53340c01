//! In-memory key-value store, used by tests and as a scratch store.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rusikaram_core::error::{Result, RusikaramError};
use rusikaram_core::storage::{KeyValueStore, StorageKey, StoreOp};

#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<StorageKey, Value>>,
    fail_writes: AtomicBool,
    commits: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a value, as if it had been written by an earlier run.
    pub fn with_value(self, key: StorageKey, value: Value) -> Self {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key, value);
        }
        self
    }

    /// Makes every following commit fail without touching the contents.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful commits so far.
    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> HashMap<StorageKey, Value> {
        self.values
            .lock()
            .map(|values| values.clone())
            .unwrap_or_default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: StorageKey) -> Result<Option<Value>> {
        let values = self
            .values
            .lock()
            .map_err(|e| RusikaramError::internal(format!("Store lock poisoned: {}", e)))?;
        Ok(values.get(&key).cloned())
    }

    fn commit(&self, batch: Vec<StoreOp>) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RusikaramError::io("simulated write failure"));
        }

        let mut values = self
            .values
            .lock()
            .map_err(|e| RusikaramError::internal(format!("Store lock poisoned: {}", e)))?;

        for op in batch {
            match op {
                StoreOp::Put(key, value) => {
                    values.insert(key, value);
                }
                StoreOp::Delete(key) => {
                    values.remove(&key);
                }
            }
        }
        self.commits.fetch_add(1, Ordering::SeqCst);

        Ok(())
    }
}
