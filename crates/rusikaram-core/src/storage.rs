//! Key-value storage abstraction.
//!
//! The order form keeps three independent records in a local key-value
//! store. Values are JSON documents; a batch of writes is applied atomically.

use serde_json::Value;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::Result;

/// Keys of the durable records.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, IntoStaticStr, EnumIter,
)]
pub enum StorageKey {
    /// Phone number to `{name, address}`.
    #[strum(serialize = "customerDB")]
    CustomerDb,
    /// Submitted orders, oldest first.
    #[strum(serialize = "orders")]
    Orders,
    /// The draft being edited. Absent after a submission.
    #[strum(serialize = "currentForm")]
    CurrentForm,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// A single write inside a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreOp {
    Put(StorageKey, Value),
    Delete(StorageKey),
}

/// A local key-value store holding JSON values.
///
/// Implementations must apply a whole batch or nothing: a reader (or the next
/// process start) either sees every write of a `commit` or none of them.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` if the key was never written or
    /// has been deleted.
    fn get(&self, key: StorageKey) -> Result<Option<Value>>;

    /// Applies all operations atomically, in order.
    fn commit(&self, batch: Vec<StoreOp>) -> Result<()>;

    fn put(&self, key: StorageKey, value: Value) -> Result<()> {
        self.commit(vec![StoreOp::Put(key, value)])
    }

    fn delete(&self, key: StorageKey) -> Result<()> {
        self.commit(vec![StoreOp::Delete(key)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_wire_names() {
        assert_eq!(StorageKey::CustomerDb.as_str(), "customerDB");
        assert_eq!(StorageKey::Orders.to_string(), "orders");
        assert_eq!(StorageKey::CurrentForm.as_ref(), "currentForm");
    }

    #[test]
    fn test_parse_round_trips_every_key() {
        for key in StorageKey::iter() {
            assert_eq!(StorageKey::from_str(key.as_str()).unwrap(), key);
        }
    }
}
