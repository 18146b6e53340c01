pub mod config_service;
pub mod dto;
pub mod order_repository;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::order_repository::KeyValueOrderRepository;
pub use crate::paths::RusikaramPaths;
pub use crate::storage::{JsonFileStore, MemoryStore};
