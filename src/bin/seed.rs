use vinyl_store_api::{
    config::AppConfig,
    models::{Order, Product, User},
    store::{Collection, Store},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let store = Store::new(&config.data_dir);
    store.init().await?;

    let users: Vec<User> = store.load(Collection::Users).await?;
    let products: Vec<Product> = store.load(Collection::Products).await?;
    let orders: Vec<Order> = store.load(Collection::Orders).await?;

    println!(
        "Seed completed in {}: {} users, {} products, {} orders",
        config.data_dir.display(),
        users.len(),
        products.len(),
        orders.len()
    );
    Ok(())
}
