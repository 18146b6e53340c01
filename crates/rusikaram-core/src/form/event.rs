use chrono::NaiveDate;

/// A single user edit on the order form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    SetDate(NaiveDate),
    /// Also auto-fills name and address for a known customer.
    SetPhone(String),
    SetName(String),
    SetAddress(String),
    SetPaymentReceived(bool),
    /// `raw` is the text typed into the quantity field of catalog line `index`.
    SetQuantity { index: usize, raw: String },
    Submit,
}
