//! Scripted session replay.

use anyhow::{anyhow, bail, Context as _, Result};
use kraken_commerce::catalog::{Catalog, CategoryFilter};
use kraken_commerce::checkout::{Contact, PaymentMethod};
use kraken_commerce::ids::ProductId;
use kraken_commerce::session::{Action, ActionOutcome};
use kraken_commerce::view::Tab;
use serde::Deserialize;

use super::{render, SessionArgs};
use crate::context::Context;

/// TOML script layout: a list of `[[actions]]` tables.
#[derive(Deserialize)]
struct ScriptFile {
    actions: Vec<Action>,
}

/// Run the session command.
pub fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    let mut actions = match args.script {
        Some(ref path) => load_script(ctx, path)?,
        None => Vec::new(),
    };
    for token in &args.actions {
        actions.push(parse_action(token, args.payment)?);
    }

    let catalog = ctx.catalog()?;
    let mut session = ctx.new_session()?;
    let mut outcomes = Vec::with_capacity(actions.len());

    for action in actions {
        if let Some(warning) = stock_warning(catalog, &action) {
            ctx.output.warn(&warning);
        }

        let outcome = session.apply(catalog, action);
        ctx.output.debug(&describe(&outcome));
        outcomes.push(outcome);
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "outcomes": outcomes,
            "view": session.view,
            "cart": session.cart.summary(),
        }));
        return Ok(());
    }

    for outcome in &outcomes {
        match outcome {
            ActionOutcome::UnknownProduct { id } => {
                ctx.output.warn(&format!("Product {} is not in the catalog", id))
            }
            ActionOutcome::CurrencyMismatch { id, cart, product } => ctx.output.warn(&format!(
                "Product {} is priced in {} but the cart holds {}",
                id, product, cart
            )),
            ActionOutcome::CheckoutRejected { reason } => {
                ctx.output.warn(&format!("Checkout rejected: {}", reason))
            }
            ActionOutcome::OrderDrafted { draft } => ctx.output.success(&format!(
                "Order drafted for {} ({}): {}. Payment is not connected.",
                draft.contact.email,
                draft.payment_method.caption(),
                draft.summary.total
            )),
            _ => {}
        }
    }

    render::tab(ctx, catalog, &session);
    render::cart(ctx, &session.cart);
    Ok(())
}

/// Out-of-stock adds are applied; this is the only place they are reported.
fn stock_warning(catalog: &Catalog, action: &Action) -> Option<String> {
    let Action::AddToCart { id } = action else {
        return None;
    };
    catalog
        .get(*id)
        .filter(|product| !product.is_available())
        .map(|product| format!("{} is out of stock but was added", product.name))
}

fn load_script(ctx: &Context, path: &str) -> Result<Vec<Action>> {
    let resolved = ctx.resolve_path(path);
    let content = std::fs::read_to_string(&resolved)
        .with_context(|| format!("Failed to read script: {}", resolved.display()))?;

    if path.ends_with(".json") {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON script: {}", path))
    } else {
        let script: ScriptFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML script: {}", path))?;
        Ok(script.actions)
    }
}

/// Parse a command-line action token.
pub fn parse_action(token: &str, payment: PaymentMethod) -> Result<Action> {
    let (verb, rest) = token
        .split_once(':')
        .ok_or_else(|| anyhow!("Invalid action '{}': expected <verb>:<argument>", token))?;

    let action = match verb {
        "add" => Action::AddToCart {
            id: parse_id(rest, token)?,
        },
        "rm" => Action::RemoveFromCart {
            id: parse_id(rest, token)?,
        },
        "qty" => {
            let (id, delta) = rest
                .split_once(':')
                .ok_or_else(|| anyhow!("Invalid action '{}': expected qty:<id>:<delta>", token))?;
            Action::UpdateQuantity {
                id: parse_id(id, token)?,
                delta: delta
                    .trim_start_matches('+')
                    .parse::<i64>()
                    .with_context(|| format!("Invalid delta in '{}'", token))?,
            }
        }
        "tab" => Action::SelectTab { tab: rest.parse::<Tab>()? },
        "category" => Action::SelectCategory {
            category: CategoryFilter::from_label(rest),
        },
        "checkout" => {
            let contact = match rest.split_once(':') {
                Some((email, telegram)) => Contact::new(email).with_telegram(telegram),
                None => Contact::new(rest),
            };
            Action::Checkout {
                contact,
                payment_method: payment,
            }
        }
        other => bail!("Unknown action '{}'", other),
    };

    Ok(action)
}

fn parse_id(s: &str, token: &str) -> Result<ProductId> {
    s.parse::<ProductId>()
        .with_context(|| format!("Invalid product id in '{}'", token))
}

fn describe(outcome: &ActionOutcome) -> String {
    match outcome {
        ActionOutcome::QuantityChanged { id, quantity } => {
            format!("product {} quantity {}", id, quantity)
        }
        ActionOutcome::Removed { id } => format!("product {} removed", id),
        ActionOutcome::UnknownProduct { id } => format!("product {} unknown", id),
        ActionOutcome::NotInCart { id } => format!("product {} not in cart", id),
        ActionOutcome::CurrencyMismatch { id, product, .. } => {
            format!("product {} refused, priced in {}", id, product)
        }
        ActionOutcome::TabSelected { tab } => format!("tab {}", tab),
        ActionOutcome::CategorySelected { category } => format!("category {}", category),
        ActionOutcome::OrderDrafted { draft } => {
            format!("order drafted, total {}", draft.summary.total)
        }
        ActionOutcome::CheckoutRejected { reason } => format!("checkout rejected: {}", reason),
    }
}
