use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use password_hash::rand_core::OsRng;
use uuid::Uuid;

use crate::{
    dto::auth::{Claims, LoginRequest, RegisterRequest},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, SESSION_TTL_SECS},
    models::{User, UserProfile},
    store::{Collection, Store},
};

/// An authenticated profile plus the token the client should carry.
#[derive(Debug)]
pub struct Session {
    pub profile: UserProfile,
    pub token: String,
}

pub async fn register_user(store: &Store, payload: RegisterRequest) -> AppResult<Session> {
    let username = required(payload.username, "username")?;
    let email = required(payload.email, "email")?;
    let phone = required(payload.phone, "phone")?;
    let password = required(payload.password, "password")?;

    let mut users: Vec<User> = store.load(Collection::Users).await?;
    if users.iter().any(|u| u.email == email) {
        return Err(AppError::DuplicateEmail);
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();

    let user = User {
        id: Uuid::new_v4(),
        username,
        email,
        phone,
        password_hash,
        created_at: Utc::now(),
        cart: Vec::new(),
        orders: Vec::new(),
    };

    let token = issue_token(&user)?;
    let profile = user.profile();

    users.push(user);
    store.replace(Collection::Users, &users).await?;

    tracing::info!(user_id = %profile.id, "user registered");
    Ok(Session { profile, token })
}

pub async fn login_user(store: &Store, payload: LoginRequest) -> AppResult<Session> {
    let email = required(payload.email, "email")?;
    let password = required(payload.password, "password")?;

    let users: Vec<User> = store.load(Collection::Users).await?;
    let user = users
        .iter()
        .find(|u| u.email == email)
        .ok_or(AppError::UserNotFound)?;

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;

    let argon2 = Argon2::default();
    if argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Err(AppError::InvalidCredentials);
    }

    let token = issue_token(user)?;

    tracing::info!(user_id = %user.id, "user logged in");
    Ok(Session {
        profile: user.profile(),
        token,
    })
}

/// Resolve the user behind a verified session token. The token may
/// outlive the user record, so absence is still possible here.
pub async fn current_user(store: &Store, auth: &AuthUser) -> AppResult<UserProfile> {
    let users: Vec<User> = store.load(Collection::Users).await?;
    let user = users
        .iter()
        .find(|u| u.id == auth.user_id)
        .ok_or(AppError::NotFound)?;
    Ok(user.profile())
}

fn issue_token(user: &User) -> AppResult<String> {
    let secret = std::env::var("JWT_SECRET")
        .map_err(|_| AppError::Internal(anyhow::anyhow!("JWT_SECRET is not set")))?;

    let expiration = Utc::now()
        .checked_add_signed(Duration::seconds(SESSION_TTL_SECS))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

fn required(field: Option<String>, name: &str) -> AppResult<String> {
    field
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::InvalidInput(format!("{name} is required")))
}
