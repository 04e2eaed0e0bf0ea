//! Product catalog module.
//!
//! Contains the product record, category filters and the catalog store.

mod catalog;
mod category;
mod product;
pub mod seed;

pub use catalog::{Catalog, FilteredProducts};
pub use category::{CategoryFilter, ALL_CATEGORIES};
pub use product::Product;
