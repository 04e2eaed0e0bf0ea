//! Terminal rendering of storefront tabs and the cart.

use kraken_commerce::cart::Cart;
use chrono::Datelike;
use kraken_commerce::catalog::{Catalog, Product};
use kraken_commerce::content::DELIVERY_FEATURES;
use kraken_commerce::session::Session;
use kraken_commerce::view::Tab;

use crate::context::Context;
use crate::output::availability_badge;

const PRODUCT_WIDTHS: [usize; 5] = [4, 26, 16, 10, 14];

/// Print a product table.
pub fn products(ctx: &Context, products: &[&Product]) {
    if products.is_empty() {
        ctx.output.info("Нет товаров в этой категории");
        return;
    }

    ctx.output
        .table_row(&["ID", "Товар", "Категория", "Цена", ""], &PRODUCT_WIDTHS);
    for product in products {
        let id = product.id.to_string();
        let name = format!("{} {}", product.glyph, product.name);
        let price = product.price.display();
        let badge = availability_badge(product.in_stock, product.availability_label());
        ctx.output.table_row(
            &[
                id.as_str(),
                name.as_str(),
                product.category.as_str(),
                price.as_str(),
                badge.as_str(),
            ],
            &PRODUCT_WIDTHS,
        );
    }
}

/// Print the cart lines and totals, as in the cart sidebar.
pub fn cart(ctx: &Context, cart: &Cart) {
    ctx.output.header("Корзина");
    if cart.is_empty() {
        ctx.output.text("Корзина пуста");
        return;
    }

    for line in cart.lines() {
        ctx.output.list_item(&format!(
            "{} {} × {} = {}",
            line.product.glyph,
            line.product.name,
            line.quantity,
            line.total()
        ));
    }
    ctx.output.kv("Товаров в корзине", &cart.total_count().to_string());
    ctx.output.kv("Итого", &cart.total_price().display());
}

/// Print whatever the session's active tab shows.
pub fn tab(ctx: &Context, catalog: &Catalog, session: &Session) {
    let info = &ctx.config.store.info;
    let view = &session.view;

    ctx.output.header(&format!("{} · {}", info.name, view.active_tab.caption()));

    match view.active_tab {
        Tab::Main => {
            ctx.output.text(&info.headline);
            ctx.output.text(&info.subheading);
            products(ctx, &view.visible_products(catalog));
        }
        Tab::Catalog => {
            let captions: Vec<String> = catalog
                .categories()
                .iter()
                .map(|c| {
                    if *c == view.category {
                        format!("[{}]", c.caption())
                    } else {
                        c.caption().to_string()
                    }
                })
                .collect();
            ctx.output.text(&captions.join("  "));
            products(ctx, &view.visible_products(catalog));
        }
        Tab::Delivery => {
            for feature in DELIVERY_FEATURES {
                ctx.output
                    .list_item(&format!("{} {}", feature.glyph, feature.title));
                ctx.output.text(&format!("  {}", feature.description));
            }
        }
        Tab::Payment => {
            ctx.output.text("Способы оплаты");
            for (_, caption) in info.payment_methods() {
                ctx.output.list_item(&caption);
            }
            ctx.output.text("Оформление заказа");
            ctx.output
                .kv("Товаров в корзине", &session.cart.total_count().to_string());
            ctx.output.kv("Итого", &session.cart.total_price().display());
        }
    }

    footer(ctx);
}

/// Print the store footer.
pub fn footer(ctx: &Context) {
    let year = chrono::Local::now().year();
    ctx.output.text("");
    for line in ctx.config.store.info.footer(year) {
        ctx.output.text(&line);
    }
}
