//! Category filter for catalog browsing.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Label of the synthetic category that matches every product.
pub const ALL_CATEGORIES: &str = "all";

/// A category selection: every product, or one category label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Every product in the catalog.
    #[default]
    All,
    /// Products whose category equals the label exactly.
    Named(String),
}

impl CategoryFilter {
    /// Build a filter from a label; `"all"` selects everything.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(label)
        }
    }

    /// The label this filter was built from.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(label) => label,
        }
    }

    /// Caption for the filter button ("Все" for the synthetic label).
    pub fn caption(&self) -> &str {
        match self {
            CategoryFilter::All => "Все",
            CategoryFilter::Named(label) => label,
        }
    }

    /// Check whether a product category passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(label) => label == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl From<String> for CategoryFilter {
    fn from(label: String) -> Self {
        Self::from_label(label)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.label().to_string()
    }
}
