use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Category;
use super::wire;

/// A product document. The category is an embedded, denormalized copy rather
/// than a reference into the `categories` collection.
///
/// Required fields stay `Option` so that incomplete request bodies can be
/// deserialized and rejected with per-field messages instead of a parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, with = "wire::date", skip_serializing_if = "Option::is_none")]
    pub create_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default, with = "wire::image_bytes", skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<u8>>,
}

impl Product {
    pub fn new(name: &str, price: f64, category: Category) -> Self {
        Self {
            id: None,
            name: Some(name.to_string()),
            price: Some(price),
            create_at: None,
            category: Some(category),
            image: None,
        }
    }

    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        match self.name.as_deref() {
            None => errors.push("name: must not be null".to_string()),
            Some(name) if name.trim().is_empty() => {
                errors.push("name: must not be empty".to_string());
            }
            Some(_) => {}
        }
        if self.price.is_none() {
            errors.push("price: must not be null".to_string());
        }
        match &self.category {
            None => errors.push("category: must not be null".to_string()),
            Some(category) => {
                for error in category.validation_errors() {
                    errors.push(format!("category.{}", error));
                }
            }
        }
        errors
    }

    /// Applies an update request onto the stored record. Only `name`, `price`
    /// and `category` are taken from the request; `id`, `createAt` and `image`
    /// keep their stored values.
    pub fn merge_update(&mut self, request: Product) {
        self.name = request.name;
        self.price = request.price;
        self.category = request.category;
    }
}

/// Create/update envelope pairing a product with an optional base64-encoded
/// image, keeping the binary payload out of the entity until it is decoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProduct {
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub image_product: Option<String>,
}
