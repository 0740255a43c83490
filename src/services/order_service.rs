use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    dto::orders::{CreateOrderRequest, OrderList},
    error::{AppError, AppResult},
    models::{Order, OrderItem, OrderStatus, Product, User},
    response::{ApiResponse, Meta},
    store::{Collection, Store},
};

fn flat_shipping() -> Decimal {
    Decimal::new(599, 2)
}

fn free_shipping_threshold() -> Decimal {
    Decimal::new(50, 0)
}

/// Convert a non-empty cart into a priced, immutable order snapshot and
/// clear the cart.
///
/// The order insert and the cart clear are two separate whole-file
/// writes; a crash between them leaves the order persisted with an
/// unemptied cart. Documented gap, not rolled back.
pub async fn create_order(
    store: &Store,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    let user_id = payload.user_id.ok_or(AppError::Unauthenticated)?;

    let mut users: Vec<User> = store.load(Collection::Users).await?;
    let user_index = users
        .iter()
        .position(|u| u.id == user_id)
        .ok_or(AppError::NotFound)?;

    if users[user_index].cart.is_empty() {
        return Err(AppError::EmptyCart);
    }

    let products: Vec<Product> = store.load(Collection::Products).await?;

    // Snapshot price and titles per line; lines whose product vanished
    // from the catalog drop out of the order silently.
    let mut items: Vec<OrderItem> = Vec::new();
    for line in &users[user_index].cart {
        let Some(product) = products.iter().find(|p| p.id == line.product_id) else {
            tracing::warn!(product_id = %line.product_id, "cart line skipped, product gone");
            continue;
        };
        items.push(OrderItem {
            product_id: line.product_id.clone(),
            quantity: line.quantity,
            price: product.price,
            product_title: product.title.clone(),
            product_artist: product.artist.clone(),
        });
    }

    // Total is computed from the surviving snapshot, so it always matches
    // the order's own item list.
    let subtotal: Decimal = items
        .iter()
        .map(|item| item.price * Decimal::from(item.quantity))
        .sum();
    let shipping_cost = if subtotal > free_shipping_threshold() {
        Decimal::ZERO
    } else {
        flat_shipping()
    };
    let total_amount = (subtotal + shipping_cost).round_dp(2);

    let order = Order {
        id: Uuid::new_v4(),
        user_id,
        items,
        total_amount,
        shipping_address: payload.shipping_address.unwrap_or_default(),
        payment_method: payload
            .payment_method
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "card".to_string()),
        status: OrderStatus::Pending,
        created_at: Utc::now(),
        shipping_cost,
    };

    let mut orders: Vec<Order> = store.load(Collection::Orders).await?;
    orders.push(order.clone());
    store.replace(Collection::Orders, &orders).await?;

    users[user_index].cart.clear();
    store.replace(Collection::Users, &users).await?;

    tracing::info!(order_id = %order.id, user_id = %user_id, total = %order.total_amount, "order created");
    Ok(ApiResponse::success("Order placed", order, Some(Meta::empty())))
}

/// All of the user's orders, newest first. The sort is stable, so
/// equal timestamps keep their stored order.
pub async fn get_user_orders(
    store: &Store,
    user_id: Option<Uuid>,
) -> AppResult<ApiResponse<OrderList>> {
    let user_id = user_id.ok_or(AppError::Unauthenticated)?;

    let mut orders: Vec<Order> = store.load(Collection::Orders).await?;
    orders.retain(|order| order.user_id == user_id);
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let total = orders.len() as i64;
    let meta = Meta::new(1, total, total);
    Ok(ApiResponse::success("Ok", OrderList { items: orders }, Some(meta)))
}
