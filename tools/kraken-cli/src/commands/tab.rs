//! Single tab rendering.

use anyhow::Result;
use kraken_commerce::session::Action;

use super::{render, TabArgs};
use crate::context::Context;

/// Run the tab command on a fresh session.
pub fn run(args: TabArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut session = ctx.new_session()?;
    session.apply(catalog, Action::SelectTab { tab: args.tab });

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "tab": args.tab,
            "products": session.view.visible_products(catalog),
        }));
        return Ok(());
    }

    render::tab(ctx, catalog, &session);
    Ok(())
}
