//! Product records.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are reference data: built once when the catalog is loaded and
/// never mutated afterwards. Cart lines hold their own snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Category label.
    pub category: String,
    /// Decorative glyph shown next to the product.
    #[serde(default)]
    pub glyph: String,
    /// Whether the product can currently be bought.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Create a new in-stock product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: category.into(),
            glyph: String::new(),
            in_stock: true,
        }
    }

    /// Set the display glyph.
    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = glyph.into();
        self
    }

    /// Mark the product as out of stock.
    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// Check if the product is available for purchase.
    ///
    /// The cart does not consult this; presentation layers gate their
    /// add-to-cart controls on it.
    pub fn is_available(&self) -> bool {
        self.in_stock
    }

    /// Label for the add-to-cart control.
    pub fn availability_label(&self) -> &'static str {
        if self.in_stock {
            "В корзину"
        } else {
            "Нет в наличии"
        }
    }
}
