mod common;

use axum::http::StatusCode;
use catalog_api::models::Category;
use common::*;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn listing_an_empty_store_returns_200_and_an_empty_array() {
    let app = empty_app();

    let response = get(&app, "/api/categories").await;

    assert_status(&response, StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test]
async fn creating_a_category_returns_201_with_an_assigned_id() {
    let app = empty_app();

    let response = send_json(
        &app,
        "POST",
        "/api/categories",
        &json!({ "name": "Computer" }),
    )
    .await;

    assert_status(&response, StatusCode::CREATED);
    let location = response.headers()["location"].to_str().unwrap().to_string();

    let body = json_body(response).await;
    let id = body["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_eq!(location, format!("/api/categories/{}", id));
    assert_eq!(body["name"], "Computer");
}

#[tokio::test]
async fn creating_a_category_without_a_name_returns_400() {
    let app = empty_app();

    let response = send_json(&app, "POST", "/api/categories", &json!({})).await;

    assert_status(&response, StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await, json!(["name: must not be null"]));
}

#[tokio::test]
async fn created_category_can_be_fetched_back_by_its_id() {
    let categories = InMemoryCategories::with(vec![Category {
        id: Some("cat-mobile".to_string()),
        name: Some("Mobile Phone".to_string()),
    }]);
    let app = app(Arc::new(InMemoryProducts::default()), categories);

    let response = get(&app, "/api/categories/cat-mobile").await;

    assert_status(&response, StatusCode::OK);
    assert_eq!(json_body(response).await["name"], "Mobile Phone");
}

#[tokio::test]
async fn fetching_an_unknown_category_returns_404_with_empty_body() {
    let app = empty_app();

    let response = get(&app, "/api/categories/missing").await;

    assert_status(&response, StatusCode::NOT_FOUND);
    assert_empty_body(response).await;
}
