use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{Collection, Database, bson::doc, bson::oid::ObjectId};

use crate::{error::Result, models::Product};

pub const PRODUCTS_COLLECTION: &str = "products";

/// Single-record product persistence. No batches, no transactions; a delete
/// never touches the embedded category copy.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>>;

    /// Inserts the product under a fresh id when `id` is unset, otherwise
    /// replaces the stored record. Returns the persisted record with its id
    /// populated.
    async fn save(&self, product: Product) -> Result<Product>;

    async fn delete(&self, product: &Product) -> Result<()>;
}

pub struct MongoProducts {
    collection: Collection<Product>,
}

impl MongoProducts {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(PRODUCTS_COLLECTION),
        }
    }
}

#[async_trait]
impl ProductService for MongoProducts {
    async fn find_all(&self) -> Result<Vec<Product>> {
        let cursor = self.collection.find(doc! {}).await?;
        let products = cursor.try_collect().await?;
        Ok(products)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>> {
        let product = self.collection.find_one(doc! { "id": id }).await?;
        Ok(product)
    }

    async fn save(&self, mut product: Product) -> Result<Product> {
        match product.id.clone() {
            Some(id) => {
                self.collection
                    .replace_one(doc! { "id": id }, &product)
                    .upsert(true)
                    .await?;
            }
            None => {
                product.id = Some(ObjectId::new().to_hex());
                self.collection.insert_one(&product).await?;
            }
        }
        Ok(product)
    }

    async fn delete(&self, product: &Product) -> Result<()> {
        if let Some(id) = &product.id {
            self.collection.delete_one(doc! { "id": id }).await?;
        }
        Ok(())
    }
}
