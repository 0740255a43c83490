use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};

use crate::{
    dto::auth::{LoginRequest, RegisterRequest},
    error::AppResult,
    middleware::auth::{AuthUser, clear_session_cookie, session_cookie},
    models::UserProfile,
    response::{ApiResponse, Meta},
    services::auth_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Register user, sets the session cookie", body = ApiResponse<UserProfile>),
        (status = 400, description = "Missing fields or duplicate email"),
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    let session = auth_service::register_user(&state.store, payload).await?;
    let body = ApiResponse::success("User registered", session.profile, Some(Meta::empty()));
    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, session_cookie(&session.token))],
        Json(body),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login user, sets the session cookie", body = ApiResponse<UserProfile>),
        (status = 401, description = "Unknown email or invalid password"),
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let session = auth_service::login_user(&state.store, payload).await?;
    let body = ApiResponse::success("Logged in", session.profile, Some(Meta::empty()));
    Ok((
        [(header::SET_COOKIE, session_cookie(&session.token))],
        Json(body),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Clears the session cookie", body = ApiResponse<serde_json::Value>),
    ),
    tag = "Auth"
)]
pub async fn logout() -> impl IntoResponse {
    // Stateless server; logout just tells the client to discard the token.
    let body = ApiResponse::success("Logged out", serde_json::json!({}), Some(Meta::empty()));
    (
        [(header::SET_COOKIE, clear_session_cookie())],
        Json(body),
    )
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user profile", body = ApiResponse<UserProfile>),
        (status = 401, description = "Missing, invalid or expired session token"),
        (status = 404, description = "User record no longer exists"),
    ),
    security(("cookie_auth" = [])),
    tag = "Auth"
)]
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<ApiResponse<UserProfile>>> {
    let profile = auth_service::current_user(&state.store, &auth).await?;
    Ok(Json(ApiResponse::success("OK", profile, Some(Meta::empty()))))
}
