//! Draft and submitted orders, plus the totals computed from them.

mod model;
pub mod totals;

pub use model::{DraftOrder, LineItems, OrderLine, SubmittedOrder};
pub use totals::{grand_total, line_amount, non_zero_lines, order_total, order_weight_grams};
