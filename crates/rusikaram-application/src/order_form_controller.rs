//! Order form controller.
//!
//! Owns the in-memory [`FormState`], feeds every edit through the pure
//! reducer in `rusikaram_core::form`, and persists whatever the reducer
//! reports as changed. Storage failures never undo an edit: they are logged
//! and the in-memory state stays authoritative for the rest of the session.

use std::sync::Arc;

use chrono::NaiveDate;
use rusikaram_core::customer::CustomerDirectory;
use rusikaram_core::error::{Result, RusikaramError};
use rusikaram_core::form::{FormEvent, FormState, Transition, reduce};
use rusikaram_core::order::{DraftOrder, SubmittedOrder, order_total, order_weight_grams};
use rusikaram_core::repository::OrderRepository;

use crate::clock::Clock;
use crate::notification_service::{NotificationService, PaymentNotice};
use crate::summary::OrdersOverview;

/// Result of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Zero-based position of the new order in the history.
    pub index: usize,
    pub total: u64,
    pub weight_grams: u64,
}

pub struct OrderFormController {
    state: FormState,
    repository: Arc<dyn OrderRepository>,
    clock: Arc<dyn Clock>,
    notifier: NotificationService,
}

impl OrderFormController {
    /// Loads the customer directory, order history and saved draft.
    ///
    /// Each record falls back to its empty value when it cannot be read, and
    /// a missing draft becomes a blank one dated today.
    pub fn open(
        repository: Arc<dyn OrderRepository>,
        clock: Arc<dyn Clock>,
        notifier: NotificationService,
    ) -> Self {
        let today = clock.today();

        let customers = repository.load_customers().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not load customer directory");
            CustomerDirectory::new()
        });
        let orders = repository.load_orders().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Could not load order history");
            Vec::new()
        });
        let draft = match repository.load_draft() {
            Ok(Some(draft)) => draft,
            Ok(None) => DraftOrder::blank(today),
            Err(e) => {
                tracing::warn!(error = %e, "Could not load saved draft");
                DraftOrder::blank(today)
            }
        };

        tracing::info!(
            customers = customers.len(),
            orders = orders.len(),
            "Order form opened"
        );

        Self {
            state: FormState {
                draft,
                orders,
                customers,
            },
            repository,
            clock,
            notifier,
        }
    }

    pub fn draft(&self) -> &DraftOrder {
        &self.state.draft
    }

    pub fn orders(&self) -> &[SubmittedOrder] {
        &self.state.orders
    }

    pub fn customers(&self) -> &CustomerDirectory {
        &self.state.customers
    }

    pub fn overview(&self) -> OrdersOverview {
        OrdersOverview::from_orders(&self.state.orders)
    }

    /// Applies one event and persists its effect.
    ///
    /// On error the state is untouched and nothing is written.
    pub fn dispatch(&mut self, event: FormEvent) -> Result<Transition> {
        let (next, transition) = reduce(&self.state, event, self.clock.today())?;
        self.state = next;
        self.persist(transition);
        Ok(transition)
    }

    pub fn set_date(&mut self, date: NaiveDate) -> Transition {
        self.edit(FormEvent::SetDate(date))
    }

    /// Sets the phone and auto-fills name and address for a known customer.
    pub fn set_phone(&mut self, phone: impl Into<String>) -> Transition {
        self.edit(FormEvent::SetPhone(phone.into()))
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Transition {
        self.edit(FormEvent::SetName(name.into()))
    }

    pub fn set_address(&mut self, address: impl Into<String>) -> Transition {
        self.edit(FormEvent::SetAddress(address.into()))
    }

    pub fn set_payment_received(&mut self, received: bool) -> Transition {
        self.edit(FormEvent::SetPaymentReceived(received))
    }

    /// Sets the pack count of catalog line `index` from raw text input.
    ///
    /// Unparseable input counts as zero; an unknown index is ignored.
    pub fn set_quantity(&mut self, index: usize, raw: impl Into<String>) -> Transition {
        self.edit(FormEvent::SetQuantity {
            index,
            raw: raw.into(),
        })
    }

    /// Validates the draft, records it as an order and starts a fresh draft.
    pub fn submit(&mut self) -> Result<SubmissionReceipt> {
        self.dispatch(FormEvent::Submit)?;

        let index = self.state.orders.len().checked_sub(1).ok_or_else(|| {
            RusikaramError::internal("Submission did not record an order")
        })?;
        let order = &self.state.orders[index];
        let receipt = SubmissionReceipt {
            index,
            total: order_total(order),
            weight_grams: order_weight_grams(order),
        };

        tracing::info!(
            order = index + 1,
            total = receipt.total,
            weight_grams = receipt.weight_grams,
            "Order submitted"
        );
        Ok(receipt)
    }

    /// Sends the payment confirmation for a paid order.
    ///
    /// `order_index` is zero-based. Nothing in the state changes, so this can
    /// be repeated freely.
    pub fn notify(&self, order_index: usize) -> Result<PaymentNotice> {
        let order = self
            .state
            .orders
            .get(order_index)
            .ok_or_else(|| RusikaramError::not_found("Order", format!("#{}", order_index + 1)))?;

        if !order.payment_received() {
            return Err(RusikaramError::PaymentPending {
                order: order_index + 1,
            });
        }

        Ok(self
            .notifier
            .notify(order.customer_name(), order.phone(), order_total(order)))
    }

    fn edit(&mut self, event: FormEvent) -> Transition {
        match self.dispatch(event) {
            Ok(transition) => transition,
            Err(e) => {
                // Field edits are infallible in the reducer.
                tracing::error!(error = %e, "Rejected field edit");
                Transition::Unchanged
            }
        }
    }

    fn persist(&self, transition: Transition) {
        let result = match transition {
            Transition::Unchanged => return,
            Transition::DraftEdited => self.repository.save_draft(&self.state.draft),
            Transition::Submitted => self
                .repository
                .record_submission(&self.state.orders, &self.state.customers),
        };

        if let Err(e) = result {
            tracing::error!(error = %e, ?transition, "Failed to persist order form");
        }
    }
}
