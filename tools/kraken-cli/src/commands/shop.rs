//! Interactive shopping session.

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use kraken_commerce::catalog::Catalog;
use kraken_commerce::checkout::{Contact, PaymentMethod};
use kraken_commerce::ids::ProductId;
use kraken_commerce::session::{Action, ActionOutcome, Session};
use kraken_commerce::view::Tab;

use super::render;
use crate::context::Context;

/// A menu entry.
#[derive(Clone, Copy)]
enum Choice {
    Navigate(Tab),
    Category,
    Add,
    Increment,
    Decrement,
    Remove,
    ShowCart,
    Pay,
    Quit,
}

/// Run the shop command.
pub fn run(ctx: &Context) -> Result<()> {
    let theme = ColorfulTheme::default();
    let catalog = ctx.catalog()?;
    let mut session = ctx.new_session()?;

    loop {
        render::tab(ctx, catalog, &session);

        let entries = menu(catalog, &session);
        let labels: Vec<&str> = entries.iter().map(|(label, _)| label.as_str()).collect();
        let picked = Select::with_theme(&theme)
            .with_prompt("Действие")
            .items(&labels)
            .default(0)
            .interact()?;

        let action = match entries[picked].1 {
            Choice::Navigate(tab) => Some(Action::SelectTab { tab }),
            Choice::Category => pick_category(catalog, &session, &theme)?,
            Choice::Add => pick_product(catalog, &session, &theme)?.map(|id| Action::AddToCart { id }),
            Choice::Increment => {
                pick_line(&session, &theme)?.map(|id| Action::UpdateQuantity { id, delta: 1 })
            }
            Choice::Decrement => {
                pick_line(&session, &theme)?.map(|id| Action::UpdateQuantity { id, delta: -1 })
            }
            Choice::Remove => pick_line(&session, &theme)?.map(|id| Action::RemoveFromCart { id }),
            Choice::ShowCart => {
                render::cart(ctx, &session.cart);
                None
            }
            Choice::Pay => Some(checkout_form(ctx, &theme)?),
            Choice::Quit => break,
        };

        if let Some(action) = action {
            match session.apply(catalog, action) {
                ActionOutcome::OrderDrafted { draft } => ctx.output.success(&format!(
                    "Заказ на {} оформлен для {}. Оплата пока не подключена.",
                    draft.summary.total, draft.contact.email
                )),
                ActionOutcome::CheckoutRejected { reason } => ctx.output.warn(&reason),
                _ => {}
            }
        }
    }

    render::cart(ctx, &session.cart);
    Ok(())
}

fn menu(catalog: &Catalog, session: &Session) -> Vec<(String, Choice)> {
    let view = &session.view;
    let mut menu: Vec<(String, Choice)> = Tab::ALL
        .into_iter()
        .filter(|tab| *tab != view.active_tab)
        .map(|tab| (format!("→ {}", tab.caption()), Choice::Navigate(tab)))
        .collect();

    if view.active_tab == Tab::Catalog {
        menu.push(("Выбрать категорию".to_string(), Choice::Category));
    }
    if view
        .visible_products(catalog)
        .iter()
        .any(|p| p.is_available())
    {
        menu.push(("В корзину".to_string(), Choice::Add));
    }
    if !session.cart.is_empty() {
        menu.push(("Корзина".to_string(), Choice::ShowCart));
        menu.push(("Увеличить количество".to_string(), Choice::Increment));
        menu.push(("Уменьшить количество".to_string(), Choice::Decrement));
        menu.push(("Удалить из корзины".to_string(), Choice::Remove));
    }
    if view.active_tab == Tab::Payment {
        menu.push(("Перейти к оплате".to_string(), Choice::Pay));
    }
    menu.push(("Выход".to_string(), Choice::Quit));
    menu
}

fn pick_category(
    catalog: &Catalog,
    session: &Session,
    theme: &ColorfulTheme,
) -> Result<Option<Action>> {
    let categories = catalog.categories();
    let captions: Vec<&str> = categories.iter().map(|c| c.caption()).collect();
    let current = categories
        .iter()
        .position(|c| *c == session.view.category)
        .unwrap_or(0);

    let picked = Select::with_theme(theme)
        .with_prompt("Категория")
        .items(&captions)
        .default(current)
        .interact_opt()?;

    Ok(picked.map(|i| Action::SelectCategory {
        category: categories[i].clone(),
    }))
}

/// Only in-stock products are offered, like a disabled add-to-cart button.
fn pick_product(
    catalog: &Catalog,
    session: &Session,
    theme: &ColorfulTheme,
) -> Result<Option<ProductId>> {
    let available: Vec<_> = session
        .view
        .visible_products(catalog)
        .into_iter()
        .filter(|p| p.is_available())
        .collect();
    let labels: Vec<String> = available
        .iter()
        .map(|p| format!("{} {} · {}", p.glyph, p.name, p.price))
        .collect();

    let picked = Select::with_theme(theme)
        .with_prompt("Товар")
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(picked.map(|i| available[i].id))
}

fn pick_line(session: &Session, theme: &ColorfulTheme) -> Result<Option<ProductId>> {
    let lines = session.cart.lines();
    let labels: Vec<String> = lines
        .iter()
        .map(|l| format!("{} {} × {}", l.product.glyph, l.product.name, l.quantity))
        .collect();

    let picked = Select::with_theme(theme)
        .with_prompt("Позиция")
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(picked.map(|i| lines[i].product.id))
}

fn checkout_form(ctx: &Context, theme: &ColorfulTheme) -> Result<Action> {
    let email: String = Input::with_theme(theme)
        .with_prompt("Email")
        .interact_text()?;
    let telegram: String = Input::with_theme(theme)
        .with_prompt("Telegram (опционально)")
        .allow_empty(true)
        .interact_text()?;

    let (methods, captions): (Vec<PaymentMethod>, Vec<String>) =
        ctx.config.store.info.payment_methods().unzip();
    let method = Select::with_theme(theme)
        .with_prompt("Способ оплаты")
        .items(&captions)
        .default(0)
        .interact()?;

    Ok(Action::Checkout {
        contact: Contact::new(email).with_telegram(telegram),
        payment_method: methods[method],
    })
}
