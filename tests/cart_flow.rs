use rust_decimal::Decimal;
use tempfile::TempDir;
use uuid::Uuid;

use vinyl_store_api::{
    dto::{
        auth::RegisterRequest,
        cart::{AddToCartRequest, UpdateCartItemRequest},
    },
    error::AppError,
    models::{Condition, Product, User, UserProfile},
    services::{auth_service, cart_service},
    store::{Collection, Store},
};

fn init_test_env() {
    // Tests all agree on the same value, set before any token is minted.
    unsafe { std::env::set_var("JWT_SECRET", "test-secret") };
}

async fn create_temp_store() -> (Store, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = Store::new(temp_dir.path());
    store.init().await.unwrap();
    (store, temp_dir)
}

async fn register(store: &Store, email: &str) -> UserProfile {
    auth_service::register_user(
        store,
        RegisterRequest {
            username: Some("collector".into()),
            email: Some(email.into()),
            phone: Some("+1-555-0100".into()),
            password: Some("spin-the-black-circle".into()),
        },
    )
    .await
    .unwrap()
    .profile
}

fn test_product(id: &str, title: &str, price: Decimal) -> Product {
    Product {
        id: id.into(),
        title: title.into(),
        artist: "Test Artist".into(),
        genre: "Rock".into(),
        year: 1970,
        price,
        description: String::new(),
        category: "Rock".into(),
        in_stock: true,
        image_url: String::new(),
        rating: 4.5,
        label: "Test".into(),
        condition: Condition::New,
        tracks: Vec::new(),
    }
}

fn add_request(user_id: Uuid, product_id: &str, quantity: i32) -> AddToCartRequest {
    AddToCartRequest {
        user_id: Some(user_id),
        product_id: Some(product_id.into()),
        quantity: Some(quantity),
    }
}

#[tokio::test]
async fn adding_same_product_twice_merges_quantities() {
    init_test_env();
    let (store, _dir) = create_temp_store().await;
    let user = register(&store, "merge@example.com").await;

    cart_service::add_to_cart(&store, add_request(user.id, "1", 2))
        .await
        .unwrap();
    cart_service::add_to_cart(&store, add_request(user.id, "1", 3))
        .await
        .unwrap();

    let cart = cart_service::get_cart(&store, Some(user.id))
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 5);
}

#[tokio::test]
async fn cart_never_holds_duplicate_product_lines() {
    init_test_env();
    let (store, _dir) = create_temp_store().await;
    let user = register(&store, "nodup@example.com").await;

    for _ in 0..3 {
        cart_service::add_to_cart(&store, add_request(user.id, "2", 1))
            .await
            .unwrap();
    }
    cart_service::add_to_cart(&store, add_request(user.id, "3", 1))
        .await
        .unwrap();

    let users: Vec<User> = store.load(Collection::Users).await.unwrap();
    let persisted = users.iter().find(|u| u.id == user.id).unwrap();
    let mut product_ids: Vec<_> = persisted.cart.iter().map(|l| l.product_id.clone()).collect();
    product_ids.sort();
    product_ids.dedup();
    assert_eq!(product_ids.len(), persisted.cart.len());
}

#[tokio::test]
async fn add_to_cart_rejects_missing_fields() {
    init_test_env();
    let (store, _dir) = create_temp_store().await;
    let user = register(&store, "invalid-add@example.com").await;

    let err = cart_service::add_to_cart(
        &store,
        AddToCartRequest {
            user_id: Some(user.id),
            product_id: None,
            quantity: Some(1),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let err = cart_service::add_to_cart(
        &store,
        AddToCartRequest {
            user_id: Some(user.id),
            product_id: Some("1".into()),
            quantity: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let err = cart_service::add_to_cart(
        &store,
        AddToCartRequest {
            user_id: None,
            product_id: Some("1".into()),
            quantity: Some(1),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Unauthenticated));
}

#[tokio::test]
async fn update_with_zero_or_negative_quantity_fails_and_leaves_cart_unchanged() {
    init_test_env();
    let (store, _dir) = create_temp_store().await;
    let user = register(&store, "update@example.com").await;

    cart_service::add_to_cart(&store, add_request(user.id, "1", 2))
        .await
        .unwrap();

    for bad in [0, -4] {
        let err = cart_service::update_cart_item(
            &store,
            "1",
            UpdateCartItemRequest {
                user_id: Some(user.id),
                quantity: Some(bad),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    let cart = cart_service::get_cart(&store, Some(user.id))
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(cart.items[0].quantity, 2);

    // Replace, not increment.
    cart_service::update_cart_item(
        &store,
        "1",
        UpdateCartItemRequest {
            user_id: Some(user.id),
            quantity: Some(7),
        },
    )
    .await
    .unwrap();
    let cart = cart_service::get_cart(&store, Some(user.id))
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(cart.items[0].quantity, 7);
}

#[tokio::test]
async fn update_of_absent_line_is_not_found() {
    init_test_env();
    let (store, _dir) = create_temp_store().await;
    let user = register(&store, "absent-line@example.com").await;

    let err = cart_service::update_cart_item(
        &store,
        "99",
        UpdateCartItemRequest {
            user_id: Some(user.id),
            quantity: Some(1),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn removing_absent_product_is_idempotent() {
    init_test_env();
    let (store, _dir) = create_temp_store().await;
    let user = register(&store, "remove@example.com").await;

    cart_service::add_to_cart(&store, add_request(user.id, "1", 1))
        .await
        .unwrap();

    cart_service::remove_from_cart(&store, "does-not-exist", Some(user.id))
        .await
        .unwrap();
    let cart = cart_service::get_cart(&store, Some(user.id))
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(cart.items.len(), 1);

    cart_service::remove_from_cart(&store, "1", Some(user.id))
        .await
        .unwrap();
    let cart = cart_service::get_cart(&store, Some(user.id))
        .await
        .unwrap()
        .data
        .unwrap();
    assert!(cart.items.is_empty());
}

#[tokio::test]
async fn get_cart_drops_lines_whose_product_vanished() {
    init_test_env();
    let (store, _dir) = create_temp_store().await;
    let user = register(&store, "vanished@example.com").await;

    store
        .replace(
            Collection::Products,
            &[
                test_product("p1", "Kept", Decimal::new(1000, 2)),
                test_product("p2", "Doomed", Decimal::new(2000, 2)),
            ],
        )
        .await
        .unwrap();

    cart_service::add_to_cart(&store, add_request(user.id, "p1", 1))
        .await
        .unwrap();
    cart_service::add_to_cart(&store, add_request(user.id, "p2", 1))
        .await
        .unwrap();

    store
        .replace(
            Collection::Products,
            &[test_product("p1", "Kept", Decimal::new(1000, 2))],
        )
        .await
        .unwrap();

    let cart = cart_service::get_cart(&store, Some(user.id))
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].product.id, "p1");
}

#[tokio::test]
async fn cart_operations_for_unknown_user_are_not_found() {
    init_test_env();
    let (store, _dir) = create_temp_store().await;

    let ghost = Uuid::new_v4();
    let err = cart_service::get_cart(&store, Some(ghost)).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    let err = cart_service::add_to_cart(&store, add_request(ghost, "1", 1))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}
