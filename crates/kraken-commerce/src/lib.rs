//! Storefront core for the KRAKEN digital goods shop.
//!
//! This crate holds the state a storefront page drives:
//!
//! - **Catalog**: fixed product list, category filtering
//! - **Cart**: one line per product, quantities clamped at 1, totals
//! - **View**: active tab and category filter
//! - **Session**: the cart and view of one visitor, updated through actions
//! - **Checkout**: contact validation and order drafts (no payment backend)
//!
//! Everything is synchronous and in-memory; a session lives exactly as long
//! as the value that holds it.
//!
//! # Example
//!
//! ```
//! use kraken_commerce::prelude::*;
//!
//! let catalog = Catalog::seed();
//! let mut session = Session::new(&catalog);
//!
//! session.apply(&catalog, Action::AddToCart { id: ProductId::new(1) });
//! session.apply(&catalog, Action::AddToCart { id: ProductId::new(2) });
//! session.apply(&catalog, Action::UpdateQuantity { id: ProductId::new(1), delta: 1 });
//!
//! assert_eq!(session.cart.total_count(), 3);
//! assert_eq!(session.cart.total_price().to_string(), "9997 ₽");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod content;
pub mod session;
pub mod view;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, CategoryFilter, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartSummary, LineSummary};

    // Checkout
    pub use crate::checkout::{Contact, OrderDraft, OrderStatus, PaymentMethod};

    // Session
    pub use crate::content::{StoreInfo, DELIVERY_FEATURES};
    pub use crate::session::{Action, ActionOutcome, Session};
    pub use crate::view::{Tab, ViewState};
}
