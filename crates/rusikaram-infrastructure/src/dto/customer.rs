//! Customer directory DTOs.
//!
//! Stored as a JSON object keyed by phone number:
//! `{"9000000000": {"name": "Asha", "address": "Near temple"}}`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use rusikaram_core::customer::{CustomerDirectory, CustomerRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDTO {
    pub name: String,
    #[serde(default)]
    pub address: String,
}

pub type CustomerDirectoryDTO = BTreeMap<String, CustomerDTO>;

impl From<&CustomerRecord> for CustomerDTO {
    fn from(record: &CustomerRecord) -> Self {
        CustomerDTO {
            name: record.name.clone(),
            address: record.address.clone(),
        }
    }
}

impl From<CustomerDTO> for CustomerRecord {
    fn from(dto: CustomerDTO) -> Self {
        CustomerRecord::new(dto.name, dto.address)
    }
}

pub fn directory_to_dto(directory: &CustomerDirectory) -> CustomerDirectoryDTO {
    directory
        .iter()
        .map(|(phone, record)| (phone.clone(), CustomerDTO::from(record)))
        .collect()
}

pub fn directory_from_dto(dto: CustomerDirectoryDTO) -> CustomerDirectory {
    dto.into_iter()
        .map(|(phone, record)| (phone, CustomerRecord::from(record)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_directory_wire_shape() {
        let mut directory = CustomerDirectory::new();
        directory.upsert("9000000000", CustomerRecord::new("Asha", "Near temple"));

        let value = serde_json::to_value(directory_to_dto(&directory)).unwrap();
        assert_eq!(
            value,
            json!({"9000000000": {"name": "Asha", "address": "Near temple"}})
        );
    }

    #[test]
    fn test_missing_address_defaults_to_empty() {
        let dto: CustomerDirectoryDTO =
            serde_json::from_value(json!({"9": {"name": "Ravi"}})).unwrap();
        let directory = directory_from_dto(dto);
        assert_eq!(directory.lookup("9"), Some(&CustomerRecord::new("Ravi", "")));
    }
}
