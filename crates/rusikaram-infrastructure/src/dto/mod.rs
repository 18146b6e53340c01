//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs fix the on-disk JSON shape of each storage record. They are
//! private to the infrastructure layer; the order and customer types in
//! `rusikaram-core` carry no serde attributes.

mod customer;
mod order;

pub use customer::{CustomerDTO, CustomerDirectoryDTO, directory_from_dto, directory_to_dto};
pub use order::{OrderFormDTO, OrderItemDTO};
