//! The catalog store.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::{seed, CategoryFilter, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;

/// Fixed, ordered list of products.
///
/// Identifiers are unique, prices are non-negative and share one currency.
/// Order is the display order and is preserved by every query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    currency: Currency,
}

/// TOML layout: a list of `[[products]]` tables.
#[derive(Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, validating the records.
    ///
    /// An empty list gives an empty catalog priced in the default currency.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let currency = products
            .first()
            .map(|p| p.price.currency)
            .unwrap_or_default();

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProduct(product.id.get()));
            }
            if product.price.is_negative() {
                return Err(CommerceError::NegativePrice {
                    id: product.id.get(),
                    amount: product.price.amount_minor,
                });
            }
            if product.price.currency != currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: product.price.currency.code().to_string(),
                });
            }
        }

        Ok(Self { products, currency })
    }

    /// The built-in KRAKEN assortment.
    pub fn seed() -> Self {
        Self {
            products: seed::products(),
            currency: Currency::RUB,
        }
    }

    /// Parse a JSON array of products.
    pub fn from_json_str(content: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(content)?;
        Self::new(products)
    }

    /// Parse a TOML document with `[[products]]` entries.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.products)
    }

    /// Load a catalog file; `.json` is read as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = if path.extension().is_some_and(|e| e == "json") {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        tracing::debug!(
            path = %path.display(),
            products = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Currency every price in this catalog uses.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by identifier.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Category filters: `all` first, then each distinct label in order of
    /// first appearance.
    pub fn categories(&self) -> Vec<CategoryFilter> {
        let mut seen = HashSet::new();
        let mut categories = vec![CategoryFilter::All];
        for product in &self.products {
            if seen.insert(product.category.as_str()) {
                categories.push(CategoryFilter::Named(product.category.clone()));
            }
        }
        categories
    }

    /// Products passing the filter, in catalog order.
    ///
    /// The returned iterator is cheap to clone, so callers can walk the
    /// result more than once. An unknown label yields nothing.
    pub fn filter_by_category<'c, 'f>(
        &'c self,
        filter: &'f CategoryFilter,
    ) -> FilteredProducts<'c, 'f> {
        FilteredProducts {
            inner: self.products.iter(),
            filter,
        }
    }

    /// The first `count` products, as shown on the main page.
    pub fn featured(&self, count: usize) -> &[Product] {
        &self.products[..count.min(self.products.len())]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

/// Iterator over the products matching a category filter.
#[derive(Debug, Clone)]
pub struct FilteredProducts<'c, 'f> {
    inner: std::slice::Iter<'c, Product>,
    filter: &'f CategoryFilter,
}

impl<'c> Iterator for FilteredProducts<'c, '_> {
    type Item = &'c Product;

    fn next(&mut self) -> Option<Self::Item> {
        let filter = self.filter;
        self.inner.find(|p| filter.matches(&p.category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn ids<'a>(products: impl Iterator<Item = &'a Product>) -> Vec<u32> {
        products.map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_seed_is_valid() {
        let seed = Catalog::seed();
        let rebuilt = Catalog::new(seed.products().to_vec()).unwrap();
        assert_eq!(rebuilt, seed);
        assert_eq!(seed.len(), 6);
    }

    #[test]
    fn test_categories() {
        let labels: Vec<String> = Catalog::seed()
            .categories()
            .iter()
            .map(|c| c.label().to_string())
            .collect();
        assert_eq!(
            labels,
            vec!["all", "Цифровые товары", "Доступ", "Премиум", "Наборы", "Инструменты"]
        );
    }

    #[test]
    fn test_filter_all_returns_catalog_order() {
        let catalog = Catalog::seed();
        let all = CategoryFilter::All;
        assert_eq!(ids(catalog.filter_by_category(&all)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_filter_by_category_preserves_order() {
        let catalog = Catalog::seed();
        let premium = CategoryFilter::from_label("Премиум");
        let filtered = catalog.filter_by_category(&premium);

        // Restartable: the clone walks the same sequence.
        assert_eq!(ids(filtered.clone()), vec![3, 6]);
        assert_eq!(ids(filtered), vec![3, 6]);
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        let catalog = Catalog::seed();
        let unknown = CategoryFilter::from_label("Nope");
        assert_eq!(catalog.filter_by_category(&unknown).count(), 0);
    }

    #[test]
    fn test_featured() {
        let catalog = Catalog::seed();
        assert_eq!(ids(catalog.featured(3).iter()), vec![1, 2, 3]);
        assert_eq!(catalog.featured(100).len(), 6);
    }

    #[test]
    fn test_get() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().name, "Exclusive Access Pass");
        assert!(catalog.get(ProductId::new(42)).is_none());
    }

    #[test]
    fn test_filtered_products_outlive_filter() {
        let catalog = Catalog::seed();
        let premium: Vec<&Product> = {
            let filter = CategoryFilter::from_label("Премиум");
            catalog.filter_by_category(&filter).collect()
        };
        assert_eq!(ids(premium.into_iter()), vec![3, 6]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let products = vec![
            Product::new(1u32, "A", Money::rub(10), "X"),
            Product::new(1u32, "B", Money::rub(20), "X"),
        ];
        assert!(matches!(
            Catalog::new(products),
            Err(CommerceError::DuplicateProduct(1))
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let products = vec![Product::new(1u32, "A", Money::rub(-1), "X")];
        assert!(matches!(
            Catalog::new(products),
            Err(CommerceError::NegativePrice { id: 1, amount: -1 })
        ));
    }

    #[test]
    fn test_mixed_currency_rejected() {
        let products = vec![
            Product::new(1u32, "A", Money::rub(10), "X"),
            Product::new(2u32, "B", Money::new(10, Currency::USD), "X"),
        ];
        assert!(matches!(
            Catalog::new(products),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
            [[products]]
            id = 1
            name = "Sticker"
            category = "Merch"
            glyph = "🏷️"
            price = { amount_minor = 150, currency = "USD" }

            [[products]]
            id = 2
            name = "Hoodie"
            category = "Merch"
            in_stock = false
            price = { amount_minor = 4500, currency = "USD" }
        "#;
        let catalog = Catalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.currency(), Currency::USD);
        assert!(!catalog.get(ProductId::new(2)).unwrap().in_stock);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            { "id": 10, "name": "Key", "category": "Доступ",
              "price": { "amount_minor": 100, "currency": "RUB" } }
        ]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.products()[0].id, ProductId::new(10));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        assert!(matches!(
            Catalog::from_json_str("{"),
            Err(CommerceError::SerializationError(_))
        ));
    }
}
