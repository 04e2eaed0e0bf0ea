//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod render;
pub mod session;
pub mod shop;
pub mod tab;

use clap::{Args, Subcommand};
use kraken_commerce::catalog::CategoryFilter;
use kraken_commerce::checkout::PaymentMethod;
use kraken_commerce::view::Tab;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Category label, or "all".
    #[arg(short, long, default_value = "all")]
    pub category: CategoryFilter,
}

/// Arguments for the tab command.
#[derive(Args)]
pub struct TabArgs {
    /// Tab to render: main, catalog, delivery or payment.
    #[arg(default_value = "main")]
    pub tab: Tab,
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    /// Actions to apply in order: add:<id>, rm:<id>, qty:<id>:<delta>,
    /// tab:<name>, category:<label>, checkout:<email>[:<telegram>].
    pub actions: Vec<String>,

    /// File with serialized actions (JSON array or TOML [[actions]]),
    /// applied before the command-line actions.
    #[arg(short, long)]
    pub script: Option<String>,

    /// Payment method used by checkout actions.
    #[arg(short, long, default_value = "card")]
    pub payment: PaymentMethod,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
