//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    let store = &ctx.config.store;
    ctx.output.info("[store]");
    ctx.output.kv("name", &store.info.name);
    ctx.output.kv("tagline", &store.info.tagline);
    ctx.output.kv("featured_count", &store.featured_count.to_string());

    ctx.output.info("[catalog]");
    match ctx.config.catalog.path {
        Some(ref path) => ctx.output.kv("path", path),
        None => ctx.output.kv("path", "(built-in assortment)"),
    }
    match ctx.catalog() {
        Ok(catalog) => {
            ctx.output.kv("products", &catalog.len().to_string());
            ctx.output.kv("currency", catalog.currency().code());
        }
        Err(e) => ctx.output.warn(&format!("{:#}", e)),
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("kraken.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    ctx.output
        .success(&format!("Created {}", config_path.display()));
    Ok(())
}
