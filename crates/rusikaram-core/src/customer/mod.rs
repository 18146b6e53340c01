//! Customer directory: phone-keyed lookup used to auto-fill repeat customers.

use std::collections::BTreeMap;

/// Name and address last used with a phone number.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerRecord {
    pub name: String,
    pub address: String,
}

impl CustomerRecord {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// Mapping from phone number to [`CustomerRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerDirectory {
    records: BTreeMap<String, CustomerRecord>,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a customer by exact phone number.
    pub fn lookup(&self, phone: &str) -> Option<&CustomerRecord> {
        self.records.get(phone)
    }

    /// Inserts or replaces the record for `phone`. Last write wins.
    pub fn upsert(&mut self, phone: impl Into<String>, record: CustomerRecord) {
        self.records.insert(phone.into(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CustomerRecord)> {
        self.records.iter()
    }
}

impl FromIterator<(String, CustomerRecord)> for CustomerDirectory {
    fn from_iter<T: IntoIterator<Item = (String, CustomerRecord)>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
