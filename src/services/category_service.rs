use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{Collection, Database, bson::doc, bson::oid::ObjectId};

use crate::{error::Result, models::Category};

pub const CATEGORIES_COLLECTION: &str = "categories";

/// Category persistence. Categories are never deleted in this system.
#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Category>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Category>>;

    async fn save(&self, category: Category) -> Result<Category>;
}

pub struct MongoCategories {
    collection: Collection<Category>,
}

impl MongoCategories {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(CATEGORIES_COLLECTION),
        }
    }
}

#[async_trait]
impl CategoryService for MongoCategories {
    async fn find_all(&self) -> Result<Vec<Category>> {
        let cursor = self.collection.find(doc! {}).await?;
        let categories = cursor.try_collect().await?;
        Ok(categories)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Category>> {
        let category = self.collection.find_one(doc! { "id": id }).await?;
        Ok(category)
    }

    async fn save(&self, mut category: Category) -> Result<Category> {
        match category.id.clone() {
            Some(id) => {
                self.collection
                    .replace_one(doc! { "id": id }, &category)
                    .upsert(true)
                    .await?;
            }
            None => {
                category.id = Some(ObjectId::new().to_hex());
                self.collection.insert_one(&category).await?;
            }
        }
        Ok(category)
    }
}
