//! Navigation state: the active tab and the catalog category filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CategoryFilter, Product};
use crate::error::CommerceError;

/// Number of products shown on the main tab.
pub const DEFAULT_FEATURED_COUNT: usize = 3;

/// Top-level storefront tabs. Any tab is reachable from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Landing page with featured products.
    #[default]
    Main,
    /// Full catalog with category filter.
    Catalog,
    /// Delivery information.
    Delivery,
    /// Payment methods and order summary.
    Payment,
}

impl Tab {
    /// Every tab, in navigation order.
    pub const ALL: [Tab; 4] = [Tab::Main, Tab::Catalog, Tab::Delivery, Tab::Payment];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Main => "main",
            Tab::Catalog => "catalog",
            Tab::Delivery => "delivery",
            Tab::Payment => "payment",
        }
    }

    /// Navigation caption.
    pub fn caption(&self) -> &'static str {
        match self {
            Tab::Main => "Главная",
            Tab::Catalog => "Каталог",
            Tab::Delivery => "Доставка",
            Tab::Payment => "Оплата",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "main" => Ok(Tab::Main),
            "catalog" => Ok(Tab::Catalog),
            "delivery" => Ok(Tab::Delivery),
            "payment" => Ok(Tab::Payment),
            _ => Err(CommerceError::UnknownTab(s.to_string())),
        }
    }
}

/// What the session is currently looking at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Active tab.
    pub active_tab: Tab,
    /// Category filter; only consulted on the catalog tab.
    pub category: CategoryFilter,
    /// How many products the main tab features.
    pub featured_count: usize,
}

impl ViewState {
    /// Start on the main tab with every category selected.
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Main,
            category: CategoryFilter::All,
            featured_count: DEFAULT_FEATURED_COUNT,
        }
    }

    /// Set how many products the main tab features.
    pub fn with_featured_count(mut self, count: usize) -> Self {
        self.featured_count = count;
        self
    }

    /// Switch tabs. Returns the previous tab.
    pub fn select_tab(&mut self, tab: Tab) -> Tab {
        let previous = std::mem::replace(&mut self.active_tab, tab);
        tracing::debug!(from = %previous, to = %tab, "tab changed");
        previous
    }

    /// Change the category filter. The active tab is left alone.
    pub fn select_category(&mut self, category: CategoryFilter) {
        tracing::debug!(category = %category, "category changed");
        self.category = category;
    }

    /// Products the active tab lists: featured ones on main, the filtered
    /// catalog on catalog, none on the informational tabs.
    pub fn visible_products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        match self.active_tab {
            Tab::Main => catalog.featured(self.featured_count).iter().collect(),
            Tab::Catalog => catalog.filter_by_category(&self.category).collect(),
            Tab::Delivery | Tab::Payment => Vec::new(),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(products: Vec<&Product>) -> Vec<u32> {
        products.into_iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_tab_parse_and_display() {
        for tab in Tab::ALL {
            assert_eq!(tab.as_str().parse::<Tab>().unwrap(), tab);
        }
        assert_eq!("  Catalog ".parse::<Tab>().unwrap(), Tab::Catalog);
        assert!(matches!("checkout".parse::<Tab>(), Err(CommerceError::UnknownTab(_))));
        assert_eq!(Tab::Payment.caption(), "Оплата");
    }

    #[test]
    fn test_any_tab_reachable_from_any_other() {
        let mut view = ViewState::new();
        for from in Tab::ALL {
            for to in Tab::ALL {
                view.select_tab(from);
                assert_eq!(view.select_tab(to), from);
                assert_eq!(view.active_tab, to);
            }
        }
    }

    #[test]
    fn test_visible_products_per_tab() {
        let catalog = Catalog::seed();
        let mut view = ViewState::new();
        assert_eq!(ids(view.visible_products(&catalog)), vec![1, 2, 3]);

        view.select_tab(Tab::Catalog);
        assert_eq!(ids(view.visible_products(&catalog)).len(), 6);

        view.select_category(CategoryFilter::from_label("Премиум"));
        assert_eq!(ids(view.visible_products(&catalog)), vec![3, 6]);

        view.select_tab(Tab::Delivery);
        assert!(view.visible_products(&catalog).is_empty());
    }

    #[test]
    fn test_category_ignored_outside_catalog_tab() {
        let catalog = Catalog::seed();
        let mut view = ViewState::new().with_featured_count(2);
        view.select_category(CategoryFilter::from_label("Наборы"));

        assert_eq!(view.active_tab, Tab::Main);
        assert_eq!(ids(view.visible_products(&catalog)), vec![1, 2]);
    }

    #[test]
    fn test_visible_products_outlive_view() {
        let catalog = Catalog::seed();
        let visible = {
            let mut view = ViewState::new();
            view.select_tab(Tab::Catalog);
            view.select_category(CategoryFilter::from_label("Доступ"));
            view.visible_products(&catalog)
        };
        assert_eq!(ids(visible), vec![2]);
    }
}
