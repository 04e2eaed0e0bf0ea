//! CLI configuration.

use anyhow::{Context, Result};
use kraken_commerce::content::StoreInfo;
use kraken_commerce::view::DEFAULT_FEATURED_COUNT;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Store branding and main-page settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Where the product list comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Store section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Branding copy.
    #[serde(flatten)]
    pub info: StoreInfo,

    /// Products featured on the main tab.
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
}

fn default_featured_count() -> usize {
    DEFAULT_FEATURED_COUNT
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            info: StoreInfo::default(),
            featured_count: default_featured_count(),
        }
    }
}

/// Catalog section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Product file (JSON array or TOML `[[products]]`). The built-in
    /// assortment is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Generate a default kraken.toml config file.
pub fn generate_default_config() -> String {
    r#"# KRAKEN storefront configuration

[store]
name = "KRAKEN"
tagline = "Премиум маркетплейс цифровых товаров и услуг"
featured_count = 3

[catalog]
# Replace the built-in assortment with a product file.
# path = "products.toml"
"#
    .to_string()
}
