//! Order drafts.

use crate::cart::{Cart, CartSummary};
use crate::checkout::{Contact, PaymentMethod};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Where an order stands. Drafts never leave `AwaitingPayment`: there is
/// no payment backend behind the pay button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    AwaitingPayment,
}

/// Everything the payment tab knows when the customer presses pay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderDraft {
    /// Delivery contact.
    pub contact: Contact,
    /// Chosen payment method.
    pub payment_method: PaymentMethod,
    /// Snapshot of the cart totals.
    pub summary: CartSummary,
    /// Status.
    pub status: OrderStatus,
}

impl OrderDraft {
    /// Validate the input and snapshot the cart. The cart is not modified.
    pub fn prepare(
        cart: &Cart,
        contact: Contact,
        payment_method: PaymentMethod,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        contact.validate()?;

        Ok(Self {
            contact,
            payment_method,
            summary: cart.summary(),
            status: OrderStatus::AwaitingPayment,
        })
    }
}
