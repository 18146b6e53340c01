//! Order repository backed by a [`KeyValueStore`].
//!
//! Each record is read and converted independently. Anything that does not
//! deserialize, or a draft that no longer matches the catalog, is logged and
//! replaced by the record's default instead of failing the load. Orders are
//! read one entry at a time, so an unreadable entry only drops itself.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use rusikaram_core::customer::CustomerDirectory;
use rusikaram_core::error::Result;
use rusikaram_core::order::{DraftOrder, SubmittedOrder};
use rusikaram_core::repository::OrderRepository;
use rusikaram_core::storage::{KeyValueStore, StorageKey, StoreOp};

use crate::dto::{
    CustomerDirectoryDTO, OrderFormDTO, directory_from_dto, directory_to_dto,
};

pub struct KeyValueOrderRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KeyValueOrderRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Reads `key` as `T`, treating unreadable data as absent.
    fn load_record<T: DeserializeOwned>(&self, key: StorageKey) -> Result<Option<T>> {
        let Some(value) = self.store.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_value(value) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Discarding unreadable record");
                Ok(None)
            }
        }
    }
}

impl OrderRepository for KeyValueOrderRepository {
    fn load_customers(&self) -> Result<CustomerDirectory> {
        let dto: Option<CustomerDirectoryDTO> = self.load_record(StorageKey::CustomerDb)?;
        Ok(dto.map(directory_from_dto).unwrap_or_default())
    }

    fn load_orders(&self) -> Result<Vec<SubmittedOrder>> {
        let entries: Option<Vec<Value>> = self.load_record(StorageKey::Orders)?;

        let orders = entries
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                match serde_json::from_value::<OrderFormDTO>(entry.clone()) {
                    Ok(dto) => Some(SubmittedOrder::from(dto)),
                    Err(e) => {
                        tracing::warn!(
                            position,
                            error = %e,
                            entry = %entry,
                            "Skipping unreadable order"
                        );
                        None
                    }
                }
            })
            .collect();
        Ok(orders)
    }

    fn load_draft(&self) -> Result<Option<DraftOrder>> {
        let Some(dto) = self.load_record::<OrderFormDTO>(StorageKey::CurrentForm)? else {
            return Ok(None);
        };

        match DraftOrder::try_from(dto) {
            Ok(draft) => Ok(Some(draft)),
            Err(e) => {
                tracing::warn!(error = %e, "Saved draft does not match the catalog, starting blank");
                Ok(None)
            }
        }
    }

    fn save_draft(&self, draft: &DraftOrder) -> Result<()> {
        let value = serde_json::to_value(OrderFormDTO::from(draft))?;
        self.store.put(StorageKey::CurrentForm, value)?;
        tracing::debug!(phone = %draft.phone, "Saved draft");
        Ok(())
    }

    fn record_submission(
        &self,
        orders: &[SubmittedOrder],
        customers: &CustomerDirectory,
    ) -> Result<()> {
        let orders: Vec<OrderFormDTO> = orders.iter().map(OrderFormDTO::from).collect();
        let batch = vec![
            StoreOp::Put(StorageKey::Orders, serde_json::to_value(orders)?),
            StoreOp::Put(
                StorageKey::CustomerDb,
                serde_json::to_value(directory_to_dto(customers))?,
            ),
            StoreOp::Delete(StorageKey::CurrentForm),
        ];
        self.store.commit(batch)
    }
}
