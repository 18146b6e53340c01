pub mod catalog;
pub mod config;
pub mod customer;
pub mod error;
pub mod form;
pub mod notify;
pub mod order;
pub mod repository;
pub mod storage;

// Re-export common error type
pub use error::RusikaramError;
