//! End-to-end session flows over the seed catalog.

use kraken_commerce::prelude::*;

fn id(n: u32) -> ProductId {
    ProductId::new(n)
}

#[test]
fn two_products_then_increment() {
    let catalog = Catalog::seed();
    let mut session = Session::new(&catalog);

    session.replay(
        &catalog,
        [
            Action::AddToCart { id: id(1) },
            Action::AddToCart { id: id(2) },
            Action::UpdateQuantity { id: id(1), delta: 1 },
        ],
    );

    let cart = &session.cart;
    assert_eq!(cart.unique_count(), 2);
    assert_eq!(cart.get(id(1)).unwrap().quantity, 2);
    assert_eq!(cart.get(id(2)).unwrap().quantity, 1);
    assert_eq!(cart.total_price(), Money::rub(2499 * 2 + 4999));
    assert_eq!(cart.total_price().amount_minor, 9997);
    assert_eq!(cart.total_count(), 3);
}

#[test]
fn browse_filter_and_pay() {
    let catalog = Catalog::seed();
    let mut session = Session::new(&catalog);

    session.apply(&catalog, Action::SelectTab { tab: Tab::Catalog });
    session.apply(
        &catalog,
        Action::SelectCategory {
            category: "Премиум".parse().unwrap(),
        },
    );

    let premium: Vec<ProductId> = session
        .view
        .visible_products(&catalog)
        .iter()
        .filter(|p| p.is_available())
        .map(|p| p.id)
        .collect();
    assert_eq!(premium, vec![id(3)]);

    for product_id in premium {
        session.apply(&catalog, Action::AddToCart { id: product_id });
    }

    session.apply(&catalog, Action::SelectTab { tab: Tab::Payment });
    let outcome = session.apply(
        &catalog,
        Action::Checkout {
            contact: Contact::new("your@email.com").with_telegram("@username"),
            payment_method: PaymentMethod::EWallet,
        },
    );

    let ActionOutcome::OrderDrafted { draft } = outcome else {
        panic!("checkout should have been accepted");
    };
    assert_eq!(draft.summary.item_count, 1);
    assert_eq!(draft.summary.total.to_string(), "9999 ₽");
    assert_eq!(draft.payment_method, PaymentMethod::EWallet);
    assert_eq!(session.view.active_tab, Tab::Payment);
}

#[test]
fn decrement_never_removes_and_remove_is_idempotent() {
    let catalog = Catalog::seed();
    let mut session = Session::new(&catalog);

    session.apply(&catalog, Action::AddToCart { id: id(5) });
    for _ in 0..3 {
        session.apply(&catalog, Action::UpdateQuantity { id: id(5), delta: -1 });
    }
    assert_eq!(session.cart.get(id(5)).unwrap().quantity, 1);

    session.apply(&catalog, Action::RemoveFromCart { id: id(5) });
    let after_first = session.clone();
    session.apply(&catalog, Action::RemoveFromCart { id: id(5) });
    assert_eq!(session, after_first);
    assert!(session.cart.is_empty());
}

#[test]
fn scripted_actions_from_toml() {
    #[derive(serde::Deserialize)]
    struct Script {
        actions: Vec<Action>,
    }

    let script: Script = toml::from_str(
        r#"
        [[actions]]
        action = "add_to_cart"
        id = 3

        [[actions]]
        action = "update_quantity"
        id = 3
        delta = 4

        [[actions]]
        action = "select_tab"
        tab = "delivery"
        "#,
    )
    .unwrap();

    let catalog = Catalog::seed();
    let mut session = Session::new(&catalog);
    session.replay(&catalog, script.actions);

    assert_eq!(session.cart.total_count(), 5);
    assert_eq!(session.cart.total_price(), Money::rub(9999 * 5));
    assert_eq!(session.view.active_tab, Tab::Delivery);
}
