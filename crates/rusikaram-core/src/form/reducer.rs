//! Pure state transitions for the order form.
//!
//! `reduce` never touches storage. It returns the next state together with a
//! [`Transition`] that tells the caller which durable records changed, so
//! persistence can be driven from the outside.

use chrono::NaiveDate;

use crate::customer::{CustomerDirectory, CustomerRecord};
use crate::error::{Result, RusikaramError};
use crate::form::event::FormEvent;
use crate::form::quantity::parse_quantity;
use crate::order::{DraftOrder, SubmittedOrder};

/// Message shown when a submission is missing required fields.
pub const MISSING_REQUIRED_FIELDS: &str = "Name and phone required";

/// Everything the form works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub draft: DraftOrder,
    pub orders: Vec<SubmittedOrder>,
    pub customers: CustomerDirectory,
}

impl FormState {
    /// A fresh state with a blank draft and no history.
    pub fn empty(today: NaiveDate) -> Self {
        Self {
            draft: DraftOrder::blank(today),
            orders: Vec::new(),
            customers: CustomerDirectory::new(),
        }
    }
}

/// Which durable records an event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    Unchanged,
    /// Only the draft changed.
    DraftEdited,
    /// An order was appended, the customer upserted and the draft reset.
    Submitted,
}

/// Applies `event` to `state`.
///
/// `today` is used for the fresh draft after a submission. A submission
/// without name or phone is rejected with a validation error and no state.
pub fn reduce(state: &FormState, event: FormEvent, today: NaiveDate) -> Result<(FormState, Transition)> {
    let mut next = state.clone();

    match event {
        FormEvent::SetDate(date) => next.draft.order_date = date,
        FormEvent::SetPhone(phone) => {
            if let Some(record) = state.customers.lookup(&phone) {
                next.draft.customer_name = record.name.clone();
                next.draft.address = record.address.clone();
            }
            next.draft.phone = phone;
        }
        FormEvent::SetName(name) => next.draft.customer_name = name,
        FormEvent::SetAddress(address) => next.draft.address = address,
        FormEvent::SetPaymentReceived(received) => next.draft.payment_received = received,
        FormEvent::SetQuantity { index, raw } => {
            if !next.draft.set_quantity(index, parse_quantity(&raw)) {
                tracing::warn!(index, "Ignoring quantity for unknown catalog line");
                return Ok((next, Transition::Unchanged));
            }
        }
        FormEvent::Submit => return submit(next, today),
    }

    let transition = if next.draft == state.draft {
        Transition::Unchanged
    } else {
        Transition::DraftEdited
    };
    Ok((next, transition))
}

fn submit(mut next: FormState, today: NaiveDate) -> Result<(FormState, Transition)> {
    let draft = &next.draft;
    if draft.customer_name.trim().is_empty() || draft.phone.trim().is_empty() {
        return Err(RusikaramError::validation(MISSING_REQUIRED_FIELDS));
    }

    next.orders.push(SubmittedOrder::from_draft(draft));
    next.customers.upsert(
        draft.phone.clone(),
        CustomerRecord::new(draft.customer_name.clone(), draft.address.clone()),
    );
    next.draft = DraftOrder::blank(today);

    Ok((next, Transition::Submitted))
}
