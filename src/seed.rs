//! Startup seed data: both collections are dropped and repopulated with fixed
//! sample records. Runs fire-and-forget; failures are logged, never retried,
//! and never block startup.

use chrono::Utc;
use mongodb::{Database, bson::Document};

use crate::{
    error::Result,
    models::{Category, Product},
    services::{CATEGORIES_COLLECTION, CategoryService, PRODUCTS_COLLECTION, ProductService},
};

pub async fn run(db: &Database, categories: &dyn CategoryService, products: &dyn ProductService) {
    if let Err(e) = seed(db, categories, products).await {
        tracing::error!("Seeding failed: {}", e);
    }
}

async fn seed(
    db: &Database,
    categories: &dyn CategoryService,
    products: &dyn ProductService,
) -> Result<()> {
    drop_collection(db, PRODUCTS_COLLECTION).await;
    drop_collection(db, CATEGORIES_COLLECTION).await;

    let mobile_phone = categories.save(Category::new("Mobile Phone")).await?;
    tracing::info!("The category with name Mobile Phone has been created");

    for name in ["Computer", "Others"] {
        categories.save(Category::new(name)).await?;
        tracing::info!("The category with name {} has been created", name);
    }

    for (name, price) in [
        ("IPhone 5", 450.89),
        ("IPhone 6", 500.89),
        ("Iphone 7", 790.90),
    ] {
        let mut product = Product::new(name, price, mobile_phone.clone());
        product.create_at = Some(Utc::now());
        let saved = products.save(product).await?;
        tracing::info!(
            "Insert: {} {}",
            saved.id.as_deref().unwrap_or_default(),
            name
        );
    }

    Ok(())
}

// A missing collection must not abort seeding.
async fn drop_collection(db: &Database, name: &str) {
    if let Err(e) = db.collection::<Document>(name).drop().await {
        tracing::warn!("Could not drop collection {}: {}", name, e);
    }
}
