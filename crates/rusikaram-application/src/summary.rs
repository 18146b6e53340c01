//! Read-only view models for the order summary.

use chrono::NaiveDate;
use rusikaram_core::order::{
    SubmittedOrder, grand_total, line_amount, non_zero_lines, order_total, order_weight_grams,
};

/// One non-empty line of a submitted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub name: String,
    pub quantity: u32,
    pub amount: u64,
}

/// A submitted order as shown in the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    /// Zero-based position in the order history.
    pub index: usize,
    pub order_date: NaiveDate,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub total: u64,
    pub weight_grams: u64,
    pub payment_received: bool,
    pub lines: Vec<SummaryLine>,
    /// Payment notices are only offered for paid orders.
    pub notify_available: bool,
}

impl OrderSummary {
    pub fn from_order(index: usize, order: &SubmittedOrder) -> Self {
        let lines = non_zero_lines(order)
            .map(|line| SummaryLine {
                name: line.name.clone(),
                quantity: line.quantity,
                amount: line_amount(line),
            })
            .collect();

        Self {
            index,
            order_date: order.order_date(),
            name: order.customer_name().to_string(),
            phone: order.phone().to_string(),
            address: order.address().to_string(),
            total: order_total(order),
            weight_grams: order_weight_grams(order),
            payment_received: order.payment_received(),
            lines,
            notify_available: order.payment_received(),
        }
    }

    /// One-based number shown to the clerk.
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Every submitted order plus the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrdersOverview {
    pub orders: Vec<OrderSummary>,
    pub grand_total: u64,
}

impl OrdersOverview {
    pub fn from_orders(orders: &[SubmittedOrder]) -> Self {
        Self {
            orders: orders
                .iter()
                .enumerate()
                .map(|(index, order)| OrderSummary::from_order(index, order))
                .collect(),
            grand_total: grand_total(orders),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
