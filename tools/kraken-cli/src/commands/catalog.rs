//! Catalog listing commands.

use anyhow::Result;
use kraken_commerce::catalog::Product;

use super::{render, CatalogArgs};
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let products: Vec<&Product> = catalog.filter_by_category(&args.category).collect();

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output
        .header(&format!("Каталог товаров · {}", args.category.caption()));
    render::products(ctx, &products);
    Ok(())
}

/// Run the categories command.
pub fn run_categories(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let categories = catalog.categories();

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Категории");
    for category in &categories {
        let count = catalog.filter_by_category(category).count();
        ctx.output
            .list_item(&format!("{} ({})", category.label(), count));
    }
    Ok(())
}
