use crate::{
    dto::products::{ProductList, ProductQuery},
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, Meta},
    store::{Collection, Store},
};

// Linear scans over the in-memory catalog; a few dozen records at most.

pub async fn list_products(
    store: &Store,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let mut items: Vec<Product> = store.load(Collection::Products).await?;

    if let Some(q) = query.q.as_ref().filter(|s| !s.is_empty()) {
        let needle = q.to_lowercase();
        items.retain(|p| {
            p.title.to_lowercase().contains(&needle) || p.artist.to_lowercase().contains(&needle)
        });
    }

    if let Some(category) = query.category.as_ref().filter(|s| !s.is_empty()) {
        items.retain(|p| p.category.eq_ignore_ascii_case(category));
    }

    let total = items.len() as i64;
    let meta = Meta::new(1, total, total);
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn get_product(store: &Store, id: &str) -> AppResult<ApiResponse<Product>> {
    let products: Vec<Product> = store.load(Collection::Products).await?;
    let product = products
        .into_iter()
        .find(|p| p.id == id)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Product", product, None))
}
