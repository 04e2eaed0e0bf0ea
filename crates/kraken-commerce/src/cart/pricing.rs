//! Cart aggregates.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals for a cart, as shown in the order summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartSummary {
    /// Per-line breakdown in cart order.
    pub lines: Vec<LineSummary>,
    /// Sum of quantities.
    pub item_count: u64,
    /// Sum of line totals.
    pub total: Money,
}

impl CartSummary {
    /// Check if the summary covers an empty cart.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Pricing breakdown for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineSummary {
    /// Product identifier.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// Unit price times quantity.
    pub total: Money,
}
