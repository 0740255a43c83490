use axum::{extract::FromRequestParts, http::header};
use jsonwebtoken::{DecodingKey, Validation, decode};
use uuid::Uuid;

use crate::{dto::auth::Claims, error::AppError};

pub const AUTH_COOKIE: &str = "auth_token";

/// Session lifetime in seconds; expiry forces re-login, there is no
/// refresh mechanism.
pub const SESSION_TTL_SECS: i64 = 600;

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Set-Cookie value carrying a freshly issued session token.
pub fn session_cookie(token: &str) -> String {
    format!("{AUTH_COOKIE}={token}; HttpOnly; Path=/; Max-Age={SESSION_TTL_SECS}; SameSite=Lax")
}

/// Set-Cookie value that instructs the client to discard the token.
pub fn clear_session_cookie() -> String {
    format!("{AUTH_COOKIE}=; HttpOnly; Path=/; Max-Age=0; SameSite=Lax")
}

fn token_from_cookie_header(value: &str) -> Option<&str> {
    value.split(';').find_map(|pair| {
        let (name, token) = pair.trim().split_once('=')?;
        (name == AUTH_COOKIE && !token.is_empty()).then_some(token)
    })
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;
    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let cookie_token = parts
            .headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(token_from_cookie_header);

        let bearer_token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim);

        let token = cookie_token
            .or(bearer_token)
            .ok_or(AppError::Unauthenticated)?;

        let secret = std::env::var("JWT_SECRET")
            .map_err(|_| AppError::Internal(anyhow::anyhow!("JWT_SECRET is not set")))?;

        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AppError::Unauthenticated)?;

        let user_id =
            Uuid::parse_str(&decoded.claims.sub).map_err(|_| AppError::Unauthenticated)?;

        Ok(AuthUser {
            user_id,
            email: decoded.claims.email,
        })
    }
}
