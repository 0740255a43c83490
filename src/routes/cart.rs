use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
    routing::put,
};

use crate::{
    dto::cart::{
        AddToCartRequest, CartList, CartQuery, RemoveFromCartRequest, UpdateCartItemRequest,
    },
    error::AppResult,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cart_list).post(add_to_cart))
        .route("/{product_id}", put(update_cart_item).delete(remove_from_cart))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    params(
        ("userId" = Option<uuid::Uuid>, Query, description = "Cart owner")
    ),
    responses(
        (status = 200, description = "Cart lines joined against the catalog", body = ApiResponse<CartList>),
        (status = 401, description = "Missing userId"),
        (status = 404, description = "User not found"),
    ),
    tag = "Cart"
)]
pub async fn cart_list(
    State(state): State<AppState>,
    Query(query): Query<CartQuery>,
) -> AppResult<Json<ApiResponse<CartList>>> {
    let resp = cart_service::get_cart(&state.store, query.user_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Line added, or merged into an existing line", body = ApiResponse<serde_json::Value>),
        (status = 400, description = "Missing productId or quantity"),
        (status = 401, description = "Missing userId"),
        (status = 404, description = "User not found"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = cart_service::add_to_cart(&state.store, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/cart/{product_id}",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    request_body = UpdateCartItemRequest,
    responses(
        (status = 200, description = "Quantity replaced", body = ApiResponse<serde_json::Value>),
        (status = 400, description = "Quantity below 1"),
        (status = 401, description = "Missing userId"),
        (status = 404, description = "User or cart line not found"),
    ),
    tag = "Cart"
)]
pub async fn update_cart_item(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(payload): Json<UpdateCartItemRequest>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = cart_service::update_cart_item(&state.store, &product_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{product_id}",
    params(
        ("product_id" = String, Path, description = "Product ID"),
        ("userId" = Option<uuid::Uuid>, Query, description = "Cart owner, if not sent in the body")
    ),
    request_body = RemoveFromCartRequest,
    responses(
        (status = 200, description = "Line removed if present", body = ApiResponse<serde_json::Value>),
        (status = 401, description = "Missing userId"),
        (status = 404, description = "User not found"),
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Query(query): Query<CartQuery>,
    payload: Option<Json<RemoveFromCartRequest>>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let user_id = payload.and_then(|Json(p)| p.user_id).or(query.user_id);
    let resp = cart_service::remove_from_cart(&state.store, &product_id, user_id).await?;
    Ok(Json(resp))
}
