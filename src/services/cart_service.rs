use chrono::Utc;
use uuid::Uuid;

use crate::{
    dto::cart::{AddToCartRequest, CartItemDto, CartList, UpdateCartItemRequest},
    error::{AppError, AppResult},
    models::{CartLine, Product, User},
    response::{ApiResponse, Meta},
    store::{Collection, Store},
};

/// Join the user's cart lines against the catalog. Lines whose product
/// no longer exists are dropped from the view, not errored.
pub async fn get_cart(store: &Store, user_id: Option<Uuid>) -> AppResult<ApiResponse<CartList>> {
    let user_id = user_id.ok_or(AppError::Unauthenticated)?;

    let users: Vec<User> = store.load(Collection::Users).await?;
    let user = users
        .iter()
        .find(|u| u.id == user_id)
        .ok_or(AppError::NotFound)?;

    let products: Vec<Product> = store.load(Collection::Products).await?;

    let items: Vec<CartItemDto> = user
        .cart
        .iter()
        .filter_map(|line| {
            let product = products.iter().find(|p| p.id == line.product_id)?;
            Some(CartItemDto {
                product: product.clone(),
                quantity: line.quantity,
                added_at: line.added_at,
            })
        })
        .collect();

    let meta = Meta::new(1, items.len() as i64, items.len() as i64);
    Ok(ApiResponse::success("OK", CartList { items }, Some(meta)))
}

pub async fn add_to_cart(
    store: &Store,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let user_id = payload.user_id.ok_or(AppError::Unauthenticated)?;
    let product_id = payload
        .product_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::InvalidInput("productId and quantity are required".into()))?;
    let quantity = payload
        .quantity
        .ok_or_else(|| AppError::InvalidInput("productId and quantity are required".into()))?;
    if quantity < 1 {
        return Err(AppError::InvalidInput(
            "quantity must be at least 1".into(),
        ));
    }

    let mut users: Vec<User> = store.load(Collection::Users).await?;
    let user = users
        .iter_mut()
        .find(|u| u.id == user_id)
        .ok_or(AppError::NotFound)?;

    // Merge by productId: never two lines for the same product.
    match user.cart.iter_mut().find(|line| line.product_id == product_id) {
        Some(line) => line.quantity += quantity,
        None => user.cart.push(CartLine {
            product_id,
            quantity,
            added_at: Utc::now(),
        }),
    }

    store.replace(Collection::Users, &users).await?;

    Ok(ApiResponse::success(
        "Item added to cart",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Set a line's quantity exactly (replace, not increment).
pub async fn update_cart_item(
    store: &Store,
    product_id: &str,
    payload: UpdateCartItemRequest,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let user_id = payload.user_id.ok_or(AppError::Unauthenticated)?;
    let quantity = match payload.quantity {
        Some(q) if q >= 1 => q,
        _ => {
            return Err(AppError::InvalidInput(
                "quantity must be at least 1".into(),
            ));
        }
    };

    let mut users: Vec<User> = store.load(Collection::Users).await?;
    let user = users
        .iter_mut()
        .find(|u| u.id == user_id)
        .ok_or(AppError::NotFound)?;

    let line = user
        .cart
        .iter_mut()
        .find(|line| line.product_id == product_id)
        .ok_or(AppError::NotFound)?;
    line.quantity = quantity;

    store.replace(Collection::Users, &users).await?;

    Ok(ApiResponse::success(
        "Cart updated",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Idempotent: removing an absent line still succeeds.
pub async fn remove_from_cart(
    store: &Store,
    product_id: &str,
    user_id: Option<Uuid>,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let user_id = user_id.ok_or(AppError::Unauthenticated)?;

    let mut users: Vec<User> = store.load(Collection::Users).await?;
    let user = users
        .iter_mut()
        .find(|u| u.id == user_id)
        .ok_or(AppError::NotFound)?;

    user.cart.retain(|line| line.product_id != product_id);

    store.replace(Collection::Users, &users).await?;

    Ok(ApiResponse::success(
        "Item removed from cart",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
