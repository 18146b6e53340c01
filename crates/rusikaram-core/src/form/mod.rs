//! Order form events and the pure reducer that applies them.

mod event;
mod quantity;
mod reducer;

pub use event::FormEvent;
pub use quantity::parse_quantity;
pub use reducer::{FormState, MISSING_REQUIRED_FIELDS, Transition, reduce};
