//! Repository trait for the order form's durable records.

use crate::customer::CustomerDirectory;
use crate::error::Result;
use crate::order::{DraftOrder, SubmittedOrder};

/// Typed access to the customer directory, the order history and the saved
/// draft.
///
/// Loading never fails on missing or unreadable data: implementations fall
/// back to an empty directory, an empty history and no draft. An `Err` is
/// reserved for the store itself being unavailable.
pub trait OrderRepository: Send + Sync {
    fn load_customers(&self) -> Result<CustomerDirectory>;

    fn load_orders(&self) -> Result<Vec<SubmittedOrder>>;

    /// The draft saved by the previous run, if any.
    fn load_draft(&self) -> Result<Option<DraftOrder>>;

    fn save_draft(&self, draft: &DraftOrder) -> Result<()>;

    /// Persists a submission in one atomic step: the full order history, the
    /// full customer directory, and removal of the saved draft.
    fn record_submission(
        &self,
        orders: &[SubmittedOrder],
        customers: &CustomerDirectory,
    ) -> Result<()>;
}
