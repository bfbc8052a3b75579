#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use catalog_api::{
    AppState, Result,
    models::{Category, Product},
    routes,
    services::{CategoryService, ProductService},
};
use http_body_util::BodyExt;
use mongodb::bson::oid::ObjectId;
use tower::ServiceExt;

/// In-memory stand-in for the Mongo-backed product service, mirroring its
/// id-assignment and replace-on-save semantics.
#[derive(Default)]
pub struct InMemoryProducts {
    records: Mutex<Vec<Product>>,
}

impl InMemoryProducts {
    pub fn with(records: Vec<Product>) -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(records),
        })
    }
}

#[async_trait]
impl ProductService for InMemoryProducts {
    async fn find_all(&self) -> Result<Vec<Product>> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id.as_deref() == Some(id))
            .cloned())
    }

    async fn save(&self, mut product: Product) -> Result<Product> {
        let mut records = self.records.lock().unwrap();
        match product.id.clone() {
            Some(id) => {
                if let Some(slot) = records
                    .iter_mut()
                    .find(|p| p.id.as_deref() == Some(id.as_str()))
                {
                    *slot = product.clone();
                } else {
                    records.push(product.clone());
                }
            }
            None => {
                product.id = Some(ObjectId::new().to_hex());
                records.push(product.clone());
            }
        }
        Ok(product)
    }

    async fn delete(&self, product: &Product) -> Result<()> {
        self.records
            .lock()
            .unwrap()
            .retain(|p| p.id != product.id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryCategories {
    records: Mutex<Vec<Category>>,
}

impl InMemoryCategories {
    pub fn with(records: Vec<Category>) -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(records),
        })
    }
}

#[async_trait]
impl CategoryService for InMemoryCategories {
    async fn find_all(&self) -> Result<Vec<Category>> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Category>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id.as_deref() == Some(id))
            .cloned())
    }

    async fn save(&self, mut category: Category) -> Result<Category> {
        let mut records = self.records.lock().unwrap();
        match category.id.clone() {
            Some(id) => {
                if let Some(slot) = records
                    .iter_mut()
                    .find(|c| c.id.as_deref() == Some(id.as_str()))
                {
                    *slot = category.clone();
                } else {
                    records.push(category.clone());
                }
            }
            None => {
                category.id = Some(ObjectId::new().to_hex());
                records.push(category.clone());
            }
        }
        Ok(category)
    }
}

pub fn app(products: Arc<InMemoryProducts>, categories: Arc<InMemoryCategories>) -> Router {
    let state = AppState {
        products,
        categories,
    };
    routes::create_router().with_state(state)
}

pub fn empty_app() -> Router {
    app(
        Arc::new(InMemoryProducts::default()),
        Arc::new(InMemoryCategories::default()),
    )
}

pub fn phone_category() -> Category {
    Category {
        id: Some("cat-mobile".to_string()),
        name: Some("Mobile Phone".to_string()),
    }
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: &serde_json::Value,
) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn json_body(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn assert_empty_body(response: Response) {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty(), "expected empty body, got {:?}", bytes);
}

pub fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected);
}
