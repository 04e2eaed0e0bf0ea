//! CLI execution context.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use kraken_commerce::catalog::Catalog;
use kraken_commerce::session::Session;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
const CONFIG_NAMES: [&str; 3] = ["kraken.toml", ".kraken.toml", "kraken.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Product catalog, read on first use.
    catalog: OnceCell<Catalog>,
}

impl Context {
    /// Load context from config file. The catalog is not read yet.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self::new(config, output, cwd))
    }

    /// Create a context from an already loaded config.
    pub fn new(config: CliConfig, output: Output, cwd: PathBuf) -> Self {
        Self {
            config,
            output,
            cwd,
            catalog: OnceCell::new(),
        }
    }

    /// The configured catalog, or the built-in assortment.
    ///
    /// Loaded on first call, so commands that never touch products keep
    /// working with a broken `[catalog].path`.
    pub fn catalog(&self) -> Result<&Catalog> {
        if let Some(catalog) = self.catalog.get() {
            return Ok(catalog);
        }

        let catalog = match self.config.catalog.path.as_deref() {
            Some(path) => {
                let resolved = self.resolve_path(path);
                Catalog::load(&resolved).with_context(|| {
                    format!("Failed to load catalog: {}", resolved.display())
                })?
            }
            None => Catalog::seed(),
        };
        tracing::debug!(products = catalog.len(), "catalog ready");
        Ok(self.catalog.get_or_init(|| catalog))
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => {
                            tracing::debug!(path = %config_path.display(), "using config");
                            return Some(config);
                        }
                        Err(e) => {
                            tracing::warn!(path = %config_path.display(), error = %e, "skipping unreadable config");
                        }
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Start a fresh session over this run's catalog.
    pub fn new_session(&self) -> Result<Session> {
        let catalog = self.catalog()?;
        Ok(Session::new(catalog).with_featured_count(self.config.store.featured_count))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve_path(&self.cwd, path)
    }
}

fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{self, ConfigArgs, ConfigCommand};
    use crate::config::CatalogConfig;

    fn context_with_catalog(path: &str) -> Context {
        let mut config = CliConfig::default();
        config.catalog = CatalogConfig {
            path: Some(path.to_string()),
        };
        Context::new(config, Output::new(false, false), std::env::temp_dir())
    }

    #[test]
    fn test_default_catalog_is_seed() {
        let ctx = Context::new(
            CliConfig::default(),
            Output::new(false, false),
            std::env::temp_dir(),
        );
        assert_eq!(ctx.catalog().unwrap().len(), 6);
        assert_eq!(ctx.new_session().unwrap().view.featured_count, 3);
    }

    #[test]
    fn test_broken_catalog_fails_only_on_use() {
        let ctx = context_with_catalog("kraken-missing-catalog.toml");
        let err = ctx.catalog().unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load catalog"));
        assert!(ctx.new_session().is_err());

        let show = ConfigArgs {
            command: ConfigCommand::Show,
        };
        assert!(commands::config::run(show, &ctx).is_ok());
    }
}
