//! Session state and the action reducer.
//!
//! A [`Session`] is the only mutable state in the storefront. Presentation
//! layers own one per visitor, translate user input into [`Action`]s and
//! feed them through [`Session::apply`] one at a time.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::{Catalog, CategoryFilter};
use crate::checkout::{Contact, OrderDraft, PaymentMethod};
use crate::ids::ProductId;
use crate::money::Currency;
use crate::view::{Tab, ViewState};

/// A user-triggered event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Add one unit of a catalog product.
    AddToCart { id: ProductId },
    /// Drop a product's line from the cart.
    RemoveFromCart { id: ProductId },
    /// Shift a line's quantity, clamped at 1.
    UpdateQuantity { id: ProductId, delta: i64 },
    /// Switch tabs.
    SelectTab { tab: Tab },
    /// Change the catalog category filter.
    SelectCategory { category: CategoryFilter },
    /// Press the pay button.
    Checkout {
        contact: Contact,
        #[serde(default)]
        payment_method: PaymentMethod,
    },
}

/// What an action did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// The product's line now has this quantity.
    QuantityChanged { id: ProductId, quantity: u32 },
    /// The product's line was removed.
    Removed { id: ProductId },
    /// The id is not in the catalog; nothing changed.
    UnknownProduct { id: ProductId },
    /// The product is priced in another currency than the cart lines;
    /// nothing changed.
    CurrencyMismatch {
        id: ProductId,
        cart: Currency,
        product: Currency,
    },
    /// The id is not in the cart; nothing changed.
    NotInCart { id: ProductId },
    /// The active tab changed.
    TabSelected { tab: Tab },
    /// The category filter changed.
    CategorySelected { category: CategoryFilter },
    /// Checkout input was accepted. No payment was taken.
    OrderDrafted { draft: OrderDraft },
    /// Checkout input was refused; the session is unchanged.
    CheckoutRejected { reason: String },
}

/// One visitor's cart and navigation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Cart contents.
    pub cart: Cart,
    /// Active tab and category filter.
    pub view: ViewState,
}

impl Session {
    /// Start an empty session for a catalog.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            cart: Cart::new(catalog.currency()),
            view: ViewState::new(),
        }
    }

    /// Set how many products the main tab features.
    pub fn with_featured_count(mut self, count: usize) -> Self {
        self.view = self.view.with_featured_count(count);
        self
    }

    /// Apply one action. Never fails; refusals are reported in the outcome.
    pub fn apply(&mut self, catalog: &Catalog, action: Action) -> ActionOutcome {
        match action {
            Action::AddToCart { id } => match catalog.get(id) {
                Some(product) => match self.cart.add_to_cart(product) {
                    Ok(()) => self.quantity_outcome(id),
                    Err(e) => {
                        tracing::debug!(product_id = %id, error = %e, "add to cart refused");
                        ActionOutcome::CurrencyMismatch {
                            id,
                            cart: self.cart.currency(),
                            product: product.price.currency,
                        }
                    }
                },
                None => {
                    tracing::debug!(product_id = %id, "add to cart: product not in catalog");
                    ActionOutcome::UnknownProduct { id }
                }
            },
            Action::RemoveFromCart { id } => {
                if self.cart.remove_from_cart(id) {
                    ActionOutcome::Removed { id }
                } else {
                    ActionOutcome::NotInCart { id }
                }
            }
            Action::UpdateQuantity { id, delta } => {
                if self.cart.update_quantity(id, delta) {
                    self.quantity_outcome(id)
                } else {
                    ActionOutcome::NotInCart { id }
                }
            }
            Action::SelectTab { tab } => {
                self.view.select_tab(tab);
                ActionOutcome::TabSelected { tab }
            }
            Action::SelectCategory { category } => {
                self.view.select_category(category.clone());
                ActionOutcome::CategorySelected { category }
            }
            Action::Checkout {
                contact,
                payment_method,
            } => match OrderDraft::prepare(&self.cart, contact, payment_method) {
                Ok(draft) => {
                    tracing::info!(
                        items = draft.summary.item_count,
                        total = %draft.summary.total,
                        method = %payment_method,
                        "order drafted"
                    );
                    ActionOutcome::OrderDrafted { draft }
                }
                Err(e) => {
                    tracing::debug!(error = %e, "checkout rejected");
                    ActionOutcome::CheckoutRejected {
                        reason: e.to_string(),
                    }
                }
            },
        }
    }

    /// Apply actions in order, collecting the outcomes.
    pub fn replay(
        &mut self,
        catalog: &Catalog,
        actions: impl IntoIterator<Item = Action>,
    ) -> Vec<ActionOutcome> {
        actions
            .into_iter()
            .map(|action| self.apply(catalog, action))
            .collect()
    }

    fn quantity_outcome(&self, id: ProductId) -> ActionOutcome {
        match self.cart.get(id) {
            Some(line) => ActionOutcome::QuantityChanged {
                id,
                quantity: line.quantity,
            },
            None => ActionOutcome::NotInCart { id },
        }
    }
}
