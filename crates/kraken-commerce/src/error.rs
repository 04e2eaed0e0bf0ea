//! Commerce error types.
//!
//! Cart and catalog queries never fail; these errors only come from
//! building a catalog or cart, parsing labels and validating checkout input.

use thiserror::Error;

/// Errors that can occur at the edges of the storefront core.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Two catalog records share an identifier.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(u32),

    /// A catalog record has a negative unit price.
    #[error("Negative price for product {id}: {amount}")]
    NegativePrice { id: u32, amount: i64 },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Unknown navigation tab.
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    /// Unknown payment method.
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// Checkout requested with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Catalog file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
