//! Application layer for Rusikaram.
//!
//! Wires the pure form logic from `rusikaram-core` to a repository, a clock
//! and the payment notifier.

pub mod clock;
pub mod notification_service;
pub mod order_form_controller;
pub mod summary;

pub use clock::{Clock, FixedClock, SystemClock};
pub use notification_service::{
    LinkOpener, NotificationService, PaymentNotice, PrintLinkOpener, RecordingLinkOpener,
    SystemLinkOpener,
};
pub use order_form_controller::{OrderFormController, SubmissionReceipt};
pub use summary::{OrderSummary, OrdersOverview, SummaryLine};
