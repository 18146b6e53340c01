//! Payment notification message and messaging deep link.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Country prefix put in front of every phone number. Fixed: the shop only
/// serves Indian numbers.
pub const COUNTRY_CODE: &str = "91";

/// Base of the messaging deep link.
pub const MESSAGING_BASE_URL: &str = "https://wa.me/";

/// Characters left as is by `encodeURIComponent`; everything else is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The text sent to a customer once their payment is in.
pub fn payment_message(name: &str, amount: u64) -> String {
    format!(
        "Hi {}, your payment of ₹{} for Rusikaram order has been received. Thank you! 🙏",
        name, amount
    )
}

/// Percent-encodes `text` for use as a single query parameter value.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Builds the deep link that opens a chat with `phone` pre-filled with the
/// payment message.
pub fn payment_link(name: &str, phone: &str, amount: u64) -> String {
    format!(
        "{}{}{}?text={}",
        MESSAGING_BASE_URL,
        COUNTRY_CODE,
        phone,
        encode_component(&payment_message(name, amount))
    )
}
