//! Kraken CLI - terminal storefront for the KRAKEN catalog.
//!
//! Commands:
//! - `kraken catalog` - List products, optionally by category
//! - `kraken categories` - List category labels
//! - `kraken tab` - Render one storefront tab
//! - `kraken session` - Replay cart and navigation actions
//! - `kraken shop` - Interactive shopping session
//! - `kraken config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CatalogArgs, ConfigArgs, SessionArgs, TabArgs};

/// Kraken CLI - Browse the catalog and drive a shopping session
#[derive(Parser)]
#[command(name = "kraken")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Catalog(CatalogArgs),

    /// List category labels
    Categories,

    /// Render a storefront tab
    Tab(TabArgs),

    /// Apply actions to a fresh session and print the cart
    Session(SessionArgs),

    /// Shop interactively
    Shop,

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config; the catalog is read by the commands that need it
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Categories => commands::catalog::run_categories(&ctx),
        Commands::Tab(args) => commands::tab::run(args, &ctx),
        Commands::Session(args) => commands::session::run(args, &ctx),
        Commands::Shop => commands::shop::run(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
