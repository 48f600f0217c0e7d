// tests/cart_service_unit.rs
use std::sync::Arc;

mod support;

use rust_decimal::Decimal;

use pantry_core::application::commands::carts::{
    AddItemCommand, CartCommandService, RemoveItemCommand, UpdateQuantityCommand,
};
use pantry_core::application::dto::AuthenticatedAccount;
use pantry_core::application::error::ApplicationError;
use pantry_core::application::queries::carts::CartQueryService;
use pantry_core::domain::account::{AccountId, Capability, Role};
use pantry_core::domain::cart::CartRepository;

use support::mocks::{InMemoryCartRepo, StaticCatalog};

fn actor_for(id: i64) -> AuthenticatedAccount {
    let now = chrono::Utc::now();
    AuthenticatedAccount {
        id: AccountId::new(id).unwrap(),
        email: "amy@x.com".into(),
        role: Role::User,
        capabilities: Role::User.default_capabilities(),
        issued_at: now,
        expires_at: now + chrono::Duration::hours(1),
    }
}

fn quantity_of(cart: &pantry_core::application::dto::CartDto, product_id: i64) -> Option<u32> {
    cart.items
        .iter()
        .find(|line| line.product_id == product_id)
        .map(|line| line.quantity)
}

#[tokio::test]
async fn cart_lifecycle_add_increment_set_reject_remove() {
    let repo = Arc::new(InMemoryCartRepo::new());
    let svc = CartCommandService::new(Arc::clone(&repo) as _);
    let actor = actor_for(1);

    // first add appends a line
    let cart = svc
        .add_item(
            &actor,
            AddItemCommand {
                product_id: 7,
                quantity: 2,
            },
        )
        .await
        .expect("first add");
    assert_eq!(quantity_of(&cart, 7), Some(2));

    // second add for the same product increments, it does not append
    let cart = svc
        .add_item(
            &actor,
            AddItemCommand {
                product_id: 7,
                quantity: 3,
            },
        )
        .await
        .expect("second add");
    assert_eq!(cart.items.len(), 1);
    assert_eq!(quantity_of(&cart, 7), Some(5));

    // update sets the quantity exactly
    let cart = svc
        .update_quantity(
            &actor,
            UpdateQuantityCommand {
                product_id: 7,
                quantity: 1,
            },
        )
        .await
        .expect("set quantity");
    assert_eq!(quantity_of(&cart, 7), Some(1));

    // zero is rejected and the line is untouched
    let err = svc
        .update_quantity(
            &actor,
            UpdateQuantityCommand {
                product_id: 7,
                quantity: 0,
            },
        )
        .await
        .expect_err("zero quantity");
    assert!(matches!(err, ApplicationError::Validation(_)));

    let cart = repo.fetch(actor.id).await.expect("fetch");
    assert_eq!(cart.items[0].quantity.get(), 1);

    // remove deletes the line, removing again still succeeds
    let cart = svc
        .remove_item(&actor, RemoveItemCommand { product_id: 7 })
        .await
        .expect("remove");
    assert!(cart.items.is_empty());

    let cart = svc
        .remove_item(&actor, RemoveItemCommand { product_id: 7 })
        .await
        .expect("idempotent remove");
    assert!(cart.items.is_empty());
}

#[tokio::test]
async fn add_item_rejects_invalid_input() {
    let svc = CartCommandService::new(Arc::new(InMemoryCartRepo::new()));
    let actor = actor_for(1);

    let err = svc
        .add_item(
            &actor,
            AddItemCommand {
                product_id: 7,
                quantity: 0,
            },
        )
        .await
        .expect_err("zero quantity");
    assert!(matches!(err, ApplicationError::Validation(_)));

    let err = svc
        .add_item(
            &actor,
            AddItemCommand {
                product_id: -3,
                quantity: 1,
            },
        )
        .await
        .expect_err("negative product id");
    assert!(matches!(err, ApplicationError::Validation(_)));

    // beyond what the store can hold: rejected, never clamped
    let err = svc
        .add_item(
            &actor,
            AddItemCommand {
                product_id: 7,
                quantity: u32::MAX,
            },
        )
        .await
        .expect_err("oversized quantity");
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn update_quantity_for_absent_line_is_not_found() {
    let svc = CartCommandService::new(Arc::new(InMemoryCartRepo::new()));
    let actor = actor_for(1);

    let err = svc
        .update_quantity(
            &actor,
            UpdateQuantityCommand {
                product_id: 7,
                quantity: 2,
            },
        )
        .await
        .expect_err("absent line");
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn carts_are_isolated_per_account() {
    let repo = Arc::new(InMemoryCartRepo::new());
    let svc = CartCommandService::new(Arc::clone(&repo) as _);

    svc.add_item(
        &actor_for(1),
        AddItemCommand {
            product_id: 7,
            quantity: 2,
        },
    )
    .await
    .expect("account 1 add");

    let other = repo.fetch(AccountId::new(2).unwrap()).await.expect("fetch");
    assert!(other.is_empty());
}

#[tokio::test]
async fn actor_without_cart_capability_is_forbidden() {
    let svc = CartCommandService::new(Arc::new(InMemoryCartRepo::new()));

    let mut actor = actor_for(1);
    actor.capabilities = [Capability::new("profile", "read")].into();

    let err = svc
        .add_item(
            &actor,
            AddItemCommand {
                product_id: 7,
                quantity: 1,
            },
        )
        .await
        .expect_err("missing capability");
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn concurrent_adds_never_lose_an_increment() {
    let repo = Arc::new(InMemoryCartRepo::new());
    let svc = Arc::new(CartCommandService::new(
        Arc::clone(&repo) as Arc<dyn pantry_core::domain::cart::CartRepository>
    ));
    let actor = actor_for(1);

    let mut handles = Vec::new();
    for _ in 0..2 {
        let svc = Arc::clone(&svc);
        let actor = actor.clone();
        handles.push(tokio::spawn(async move {
            svc.add_item(
                &actor,
                AddItemCommand {
                    product_id: 7,
                    quantity: 1,
                },
            )
            .await
        }));
    }
    for handle in handles {
        handle.await.expect("join").expect("add");
    }

    let cart = repo.fetch(actor.id).await.expect("fetch");
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity.get(), 2);
}

#[tokio::test]
async fn totals_use_current_prices_and_skip_unknown_products() {
    let repo = Arc::new(InMemoryCartRepo::new());
    let commands = CartCommandService::new(Arc::clone(&repo) as _);
    let queries = CartQueryService::new(
        Arc::clone(&repo) as _,
        Arc::new(StaticCatalog::with_prices(&[
            (1, Decimal::new(250, 2)),
            (2, Decimal::new(400, 2)),
        ])),
    );
    let actor = actor_for(1);

    commands
        .add_item(
            &actor,
            AddItemCommand {
                product_id: 1,
                quantity: 2,
            },
        )
        .await
        .expect("add 1");
    commands
        .add_item(
            &actor,
            AddItemCommand {
                product_id: 2,
                quantity: 1,
            },
        )
        .await
        .expect("add 2");
    // a product that has since left the catalog
    commands
        .add_item(
            &actor,
            AddItemCommand {
                product_id: 99,
                quantity: 4,
            },
        )
        .await
        .expect("add stale");

    let totals = queries.totals(&actor).await.expect("totals");
    assert_eq!(totals.subtotal, Decimal::new(900, 2));
    assert_eq!(totals.tax, Decimal::new(72, 2));
    assert_eq!(totals.total, Decimal::new(972, 2));
}

#[tokio::test]
async fn empty_cart_reads_and_totals_to_zero() {
    let repo = Arc::new(InMemoryCartRepo::new());
    let queries = CartQueryService::new(Arc::clone(&repo) as _, Arc::new(StaticCatalog::empty()));
    let actor = actor_for(1);

    let cart = queries.get_cart(&actor).await.expect("cart");
    assert!(cart.items.is_empty());

    let totals = queries.totals(&actor).await.expect("totals");
    assert_eq!(totals.subtotal, Decimal::ZERO);
    assert_eq!(totals.total, Decimal::ZERO);
}
