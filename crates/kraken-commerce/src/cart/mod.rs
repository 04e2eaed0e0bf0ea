//! Shopping cart module.
//!
//! Contains the cart, its lines and the derived totals.

mod cart;
mod pricing;

pub use cart::{Cart, CartLine};
pub use pricing::{CartSummary, LineSummary};
