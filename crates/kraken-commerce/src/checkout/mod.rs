//! Checkout module.
//!
//! The payment tab's form: contact details, payment method and an order
//! draft. No payment is ever processed.

mod contact;
mod order;
mod payment;

pub use contact::Contact;
pub use order::{OrderDraft, OrderStatus};
pub use payment::PaymentMethod;
