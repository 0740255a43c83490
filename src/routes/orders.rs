use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::{
    dto::orders::{CreateOrderRequest, OrderList, OrdersQuery},
    error::AppResult,
    models::Order,
    response::ApiResponse,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_orders).post(create_order))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(
        ("userId" = Option<uuid::Uuid>, Query, description = "Order owner")
    ),
    responses(
        (status = 200, description = "User's orders, newest first", body = ApiResponse<OrderList>),
        (status = 401, description = "Missing userId"),
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::get_user_orders(&state.store, query.user_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created from the cart", body = ApiResponse<Order>),
        (status = 400, description = "Cart is empty"),
        (status = 401, description = "Missing userId"),
        (status = 404, description = "User not found"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<impl IntoResponse> {
    let resp = order_service::create_order(&state.store, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}
