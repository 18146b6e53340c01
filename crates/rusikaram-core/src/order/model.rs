//! Order domain models.

use chrono::NaiveDate;

use crate::catalog::{CATALOG, CatalogItem};
use crate::error::{Result, RusikaramError};

/// One catalog entry together with the ordered number of packs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub name: String,
    pub unit_price: u32,
    pub quantity: u32,
}

impl OrderLine {
    /// Creates a zero-quantity line for a catalog item.
    pub fn from_catalog(item: &CatalogItem) -> Self {
        Self {
            name: item.name.to_string(),
            unit_price: item.unit_price,
            quantity: 0,
        }
    }

    /// Price of this line: quantity x unit price.
    pub fn amount(&self) -> u64 {
        u64::from(self.quantity) * u64::from(self.unit_price)
    }
}

/// Anything made of order lines, drafts and submitted orders alike.
pub trait LineItems {
    fn lines(&self) -> &[OrderLine];
}

/// The order currently being composed on the form.
///
/// Lines are private: the only way to touch them is through
/// [`DraftOrder::set_quantity`], so a draft always has exactly one line per
/// catalog item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftOrder {
    pub customer_name: String,
    /// Doubles as the customer directory key.
    pub phone: String,
    pub address: String,
    pub payment_received: bool,
    pub order_date: NaiveDate,
    lines: Vec<OrderLine>,
}

impl DraftOrder {
    /// A blank form: empty customer fields, unpaid, every quantity zero.
    pub fn blank(order_date: NaiveDate) -> Self {
        Self {
            customer_name: String::new(),
            phone: String::new(),
            address: String::new(),
            payment_received: false,
            order_date,
            lines: CATALOG.iter().map(OrderLine::from_catalog).collect(),
        }
    }

    /// Rebuilds a draft from stored quantities.
    ///
    /// `quantities` must name the catalog items in catalog order. Prices are
    /// always taken from the current catalog.
    pub fn restore(
        customer_name: String,
        phone: String,
        address: String,
        payment_received: bool,
        order_date: NaiveDate,
        quantities: Vec<(String, u32)>,
    ) -> Result<Self> {
        if quantities.len() != CATALOG.len() {
            return Err(RusikaramError::data_access(format!(
                "draft has {} lines, catalog has {}",
                quantities.len(),
                CATALOG.len()
            )));
        }

        let mut lines = Vec::with_capacity(CATALOG.len());
        for (item, (name, quantity)) in CATALOG.iter().zip(quantities) {
            if item.name != name {
                return Err(RusikaramError::data_access(format!(
                    "draft line '{}' does not match catalog item '{}'",
                    name, item.name
                )));
            }
            lines.push(OrderLine {
                quantity,
                ..OrderLine::from_catalog(item)
            });
        }

        Ok(Self {
            customer_name,
            phone,
            address,
            payment_received,
            order_date,
            lines,
        })
    }

    /// Sets the quantity of the line at `index`.
    ///
    /// Returns `false` and leaves the draft untouched when `index` is outside
    /// the catalog.
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> bool {
        match self.lines.get_mut(index) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn quantity(&self, index: usize) -> Option<u32> {
        self.lines.get(index).map(|line| line.quantity)
    }
}

impl LineItems for DraftOrder {
    fn lines(&self) -> &[OrderLine] {
        &self.lines
    }
}

/// A submitted order. Read-only once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedOrder {
    customer_name: String,
    phone: String,
    address: String,
    payment_received: bool,
    order_date: NaiveDate,
    lines: Vec<OrderLine>,
}

impl SubmittedOrder {
    /// Snapshots the draft as it is at submission time.
    pub fn from_draft(draft: &DraftOrder) -> Self {
        Self {
            customer_name: draft.customer_name.clone(),
            phone: draft.phone.clone(),
            address: draft.address.clone(),
            payment_received: draft.payment_received,
            order_date: draft.order_date,
            lines: draft.lines.clone(),
        }
    }

    /// Rebuilds a stored order. Lines are kept exactly as recorded, even if
    /// the catalog has changed since.
    pub fn restore(
        customer_name: String,
        phone: String,
        address: String,
        payment_received: bool,
        order_date: NaiveDate,
        lines: Vec<OrderLine>,
    ) -> Self {
        Self {
            customer_name,
            phone,
            address,
            payment_received,
            order_date,
            lines,
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn payment_received(&self) -> bool {
        self.payment_received
    }

    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }
}

impl LineItems for SubmittedOrder {
    fn lines(&self) -> &[OrderLine] {
        &self.lines
    }
}
