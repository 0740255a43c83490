use jsonwebtoken::{DecodingKey, Validation, decode};
use tempfile::TempDir;
use uuid::Uuid;

use vinyl_store_api::{
    dto::auth::{Claims, LoginRequest, RegisterRequest},
    error::AppError,
    middleware::auth::AuthUser,
    models::User,
    services::auth_service,
    store::{Collection, Store},
};

const SECRET: &str = "test-secret";

fn init_test_env() {
    // Tests all agree on the same value, set before any token is minted.
    unsafe { std::env::set_var("JWT_SECRET", SECRET) };
}

async fn create_temp_store() -> (Store, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = Store::new(temp_dir.path());
    store.init().await.unwrap();
    (store, temp_dir)
}

fn register_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        username: Some("collector".into()),
        email: Some(email.into()),
        phone: Some("+1-555-0100".into()),
        password: Some("spin-the-black-circle".into()),
    }
}

#[tokio::test]
async fn register_hashes_the_password_and_issues_a_token() {
    init_test_env();
    let (store, _dir) = create_temp_store().await;

    let session = auth_service::register_user(&store, register_request("reg@example.com"))
        .await
        .unwrap();
    assert_eq!(session.profile.email, "reg@example.com");

    let users: Vec<User> = store.load(Collection::Users).await.unwrap();
    let stored = users.iter().find(|u| u.id == session.profile.id).unwrap();
    assert_ne!(stored.password_hash, "spin-the-black-circle");
    assert!(stored.password_hash.starts_with("$argon2"));
    assert!(stored.cart.is_empty());

    let decoded = decode::<Claims>(
        &session.token,
        &DecodingKey::from_secret(SECRET.as_bytes()),
        &Validation::default(),
    )
    .unwrap();
    assert_eq!(decoded.claims.sub, session.profile.id.to_string());
    assert_eq!(decoded.claims.email, "reg@example.com");
}

#[tokio::test]
async fn register_rejects_duplicate_email_and_missing_fields() {
    init_test_env();
    let (store, _dir) = create_temp_store().await;

    auth_service::register_user(&store, register_request("dup@example.com"))
        .await
        .unwrap();
    let err = auth_service::register_user(&store, register_request("dup@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateEmail));

    let err = auth_service::register_user(
        &store,
        RegisterRequest {
            username: Some("collector".into()),
            email: Some("short@example.com".into()),
            phone: None,
            password: Some("pw".into()),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn login_distinguishes_unknown_email_from_bad_password() {
    init_test_env();
    let (store, _dir) = create_temp_store().await;

    auth_service::register_user(&store, register_request("login@example.com"))
        .await
        .unwrap();

    let err = auth_service::login_user(
        &store,
        LoginRequest {
            email: Some("nobody@example.com".into()),
            password: Some("whatever".into()),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::UserNotFound));

    let err = auth_service::login_user(
        &store,
        LoginRequest {
            email: Some("login@example.com".into()),
            password: Some("wrong-password".into()),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidCredentials));

    let session = auth_service::login_user(
        &store,
        LoginRequest {
            email: Some("login@example.com".into()),
            password: Some("spin-the-black-circle".into()),
        },
    )
    .await
    .unwrap();
    assert_eq!(session.profile.email, "login@example.com");
}

#[tokio::test]
async fn current_user_resolves_profile_or_not_found() {
    init_test_env();
    let (store, _dir) = create_temp_store().await;

    let session = auth_service::register_user(&store, register_request("me@example.com"))
        .await
        .unwrap();

    let auth = AuthUser {
        user_id: session.profile.id,
        email: session.profile.email.clone(),
    };
    let profile = auth_service::current_user(&store, &auth).await.unwrap();
    assert_eq!(profile.id, session.profile.id);
    assert_eq!(profile.username, "collector");

    // A valid token can outlive its user record.
    let gone = AuthUser {
        user_id: Uuid::new_v4(),
        email: "gone@example.com".into(),
    };
    let err = auth_service::current_user(&store, &gone).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}
