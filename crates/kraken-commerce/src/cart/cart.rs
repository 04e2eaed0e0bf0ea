//! Cart and cart line types.

use crate::cart::{CartSummary, LineSummary};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Holds at most one line per product, in the order products were first
/// added. Every line has a quantity of at least 1 and every line is priced
/// in the cart's currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "CartRepr")]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart priced in the given currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line, or appends a new line with quantity 1.
    /// Availability is not checked here. An empty cart takes the product's
    /// currency; a product priced in another currency than the lines
    /// already held is refused and the cart is left unchanged.
    pub fn add_to_cart(&mut self, product: &Product) -> Result<(), CommerceError> {
        self.accept_currency(product)?;
        if !product.in_stock {
            tracing::debug!(product_id = %product.id, "adding unavailable product to cart");
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
            tracing::debug!(product_id = %product.id, quantity = line.quantity, "incremented cart line");
            return Ok(());
        }

        self.lines.push(CartLine::new(product.clone()));
        tracing::debug!(product_id = %product.id, "added cart line");
        Ok(())
    }

    fn accept_currency(&mut self, product: &Product) -> Result<(), CommerceError> {
        let currency = product.price.currency;
        if self.lines.is_empty() {
            self.currency = currency;
        } else if currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: currency.code().to_string(),
            });
        }
        Ok(())
    }

    /// Remove a product's line. Returns whether a line was removed.
    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product.id != id);
        let removed = self.lines.len() < len_before;
        if removed {
            tracing::debug!(product_id = %id, "removed cart line");
        }
        removed
    }

    /// Shift a line's quantity by `delta`, never going below 1.
    ///
    /// Returns whether a line with that id exists. Decrementing can never
    /// remove a line; use [`Cart::remove_from_cart`] for that.
    pub fn update_quantity(&mut self, id: ProductId, delta: i64) -> bool {
        let Some(line) = self.lines.iter_mut().find(|l| l.product.id == id) else {
            return false;
        };

        let target = i64::from(line.quantity)
            .saturating_add(delta)
            .clamp(1, i64::from(u32::MAX));
        line.quantity = target as u32;
        tracing::debug!(product_id = %id, delta, quantity = line.quantity, "updated cart quantity");
        true
    }

    /// Sum of unit price times quantity over every line.
    pub fn total_price(&self) -> Money {
        let amount = self
            .lines
            .iter()
            .map(|l| l.total().amount_minor)
            .fold(0_i64, i64::saturating_add);
        Money::new(amount, self.currency)
    }

    /// Sum of quantities over every line.
    pub fn total_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Lines in display order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == id)
    }

    /// Get number of distinct products.
    pub fn unique_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Currency of the cart lines, or the starting currency while empty.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Per-line totals plus the cart aggregates.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self
                .lines
                .iter()
                .map(|l| LineSummary {
                    product_id: l.product.id,
                    name: l.product.name.clone(),
                    unit_price: l.product.price,
                    quantity: l.quantity,
                    total: l.total(),
                })
                .collect(),
            item_count: self.total_count(),
            total: self.total_price(),
        }
    }
}

/// Serialized cart, checked before it becomes a [`Cart`].
#[derive(Deserialize)]
struct CartRepr {
    lines: Vec<LineRepr>,
    #[serde(default)]
    currency: Currency,
}

#[derive(Deserialize)]
struct LineRepr {
    product: Product,
    quantity: u32,
}

impl TryFrom<CartRepr> for Cart {
    type Error = CommerceError;

    fn try_from(repr: CartRepr) -> Result<Self, Self::Error> {
        let mut cart = Cart::new(repr.currency);
        for line in repr.lines {
            let id = line.product.id;
            if line.quantity == 0 {
                return Err(CommerceError::ValidationError(format!(
                    "cart line for product {id} has quantity 0"
                )));
            }
            if cart.get(id).is_some() {
                return Err(CommerceError::DuplicateProduct(id.get()));
            }
            cart.accept_currency(&line.product)?;
            cart.lines.push(CartLine {
                product: line.product,
                quantity: line.quantity,
            });
        }
        Ok(cart)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

/// A product snapshot paired with a quantity.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CartLine {
    /// Product as it was when first added.
    pub product: Product,
    /// Quantity, at least 1.
    pub quantity: u32,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn total(&self) -> Money {
        self.product.price * i64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, price: i64) -> Product {
        Product::new(id, format!("Product {id}"), Money::rub(price), "Test")
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.total_count(), 0);
        assert!(cart.total_price().is_zero());
        assert_eq!(cart.currency(), Currency::RUB);
    }

    #[test]
    fn test_add_same_item_twice() {
        let mut cart = Cart::default();
        let p = product(1, 2499);
        cart.add_to_cart(&p).unwrap();
        cart.add_to_cart(&p).unwrap();

        assert_eq!(cart.unique_count(), 1);
        assert_eq!(cart.get(p.id).unwrap().quantity, 2);
    }

    #[test]
    fn test_new_lines_append_in_order() {
        let mut cart = Cart::default();
        cart.add_to_cart(&product(3, 1)).unwrap();
        cart.add_to_cart(&product(1, 1)).unwrap();
        cart.add_to_cart(&product(3, 1)).unwrap();
        cart.add_to_cart(&product(2, 1)).unwrap();

        let order: Vec<u32> = cart.lines().iter().map(|l| l.product.id.get()).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_unavailable_product_is_still_added() {
        let mut cart = Cart::default();
        cart.add_to_cart(&product(6, 7499).out_of_stock()).unwrap();
        assert_eq!(cart.total_count(), 1);
    }

    #[test]
    fn test_update_quantity_clamps_to_one() {
        let mut cart = Cart::default();
        let p = product(1, 100);
        cart.add_to_cart(&p).unwrap();
        cart.add_to_cart(&p).unwrap();

        assert!(cart.update_quantity(p.id, -1000));
        assert_eq!(cart.get(p.id).unwrap().quantity, 1);
        assert!(cart.update_quantity(p.id, -1));
        assert_eq!(cart.unique_count(), 1);
    }

    #[test]
    fn test_update_quantity_extreme_deltas() {
        let mut cart = Cart::default();
        let p = product(1, 1);
        cart.add_to_cart(&p).unwrap();

        cart.update_quantity(p.id, i64::MIN);
        assert_eq!(cart.get(p.id).unwrap().quantity, 1);
        cart.update_quantity(p.id, i64::MAX);
        assert_eq!(cart.get(p.id).unwrap().quantity, u32::MAX);
    }

    #[test]
    fn test_update_quantity_missing_is_noop() {
        let mut cart = Cart::default();
        cart.add_to_cart(&product(1, 100)).unwrap();
        let before = cart.clone();

        assert!(!cart.update_quantity(ProductId::new(99), 5));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_from_cart() {
        let mut cart = Cart::default();
        let p = product(1, 100);
        cart.add_to_cart(&p).unwrap();

        assert!(cart.remove_from_cart(p.id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::default();
        cart.add_to_cart(&product(1, 100)).unwrap();
        let before = cart.clone();

        assert!(!cart.remove_from_cart(ProductId::new(2)));
        assert!(!cart.remove_from_cart(ProductId::new(2)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_totals_match_lines() {
        let mut cart = Cart::default();
        let a = product(1, 2499);
        let b = product(2, 4999);
        cart.add_to_cart(&a).unwrap();
        cart.add_to_cart(&b).unwrap();
        cart.update_quantity(a.id, 1);

        assert_eq!(cart.total_price(), Money::rub(2499 * 2 + 4999));
        assert_eq!(cart.total_count(), 3);

        let expected: i64 = cart
            .lines()
            .iter()
            .map(|l| l.product.price.amount_minor * i64::from(l.quantity))
            .sum();
        assert_eq!(cart.total_price().amount_minor, expected);
    }

    #[test]
    fn test_summary() {
        let mut cart = Cart::default();
        let a = product(1, 300);
        cart.add_to_cart(&a).unwrap();
        cart.update_quantity(a.id, 2);

        let summary = cart.summary();
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.total, Money::rub(900));
        assert_eq!(summary.lines[0].total, Money::rub(900));
        assert_eq!(summary.lines[0].unit_price, Money::rub(300));
    }

    #[test]
    fn test_empty_cart_takes_product_currency() {
        let mut cart = Cart::default();
        let sticker = Product::new(7u32, "Sticker", Money::new(150, Currency::USD), "Merch");
        cart.add_to_cart(&sticker).unwrap();

        assert_eq!(cart.currency(), Currency::USD);
        assert_eq!(cart.total_count(), 1);
        assert_eq!(cart.total_price(), Money::new(150, Currency::USD));
    }

    #[test]
    fn test_mixed_currency_add_refused() {
        let mut cart = Cart::default();
        cart.add_to_cart(&product(1, 2499)).unwrap();
        let before = cart.clone();

        let sticker = Product::new(7u32, "Sticker", Money::new(150, Currency::USD), "Merch");
        assert!(matches!(
            cart.add_to_cart(&sticker),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
        assert_eq!(cart, before);
        assert_eq!(cart.total_price(), Money::rub(2499));
    }

    #[test]
    fn test_deserialize_keeps_invariants() {
        let mut cart = Cart::default();
        let p = product(1, 300);
        cart.add_to_cart(&p).unwrap();
        cart.update_quantity(p.id, 2);
        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);

        let line = |quantity: u32| {
            serde_json::json!({ "product": serde_json::to_value(&p).unwrap(), "quantity": quantity })
        };
        let zero = serde_json::json!({ "lines": [line(0)], "currency": "RUB" });
        assert!(serde_json::from_value::<Cart>(zero).is_err());

        let duplicate = serde_json::json!({ "lines": [line(1), line(3)], "currency": "RUB" });
        assert!(serde_json::from_value::<Cart>(duplicate).is_err());
    }
}
