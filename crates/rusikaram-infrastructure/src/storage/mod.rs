//! Storage layer: atomic file operations and key-value stores.

mod atomic_json;
mod json_file_store;
mod memory_store;

pub use atomic_json::{AtomicJsonError, AtomicJsonFile};
pub use json_file_store::{JsonFileStore, quarantine_path};
pub use memory_store::MemoryStore;
