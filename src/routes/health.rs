use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use mongodb::Database;
use serde_json::json;

use crate::{database, error::Result};

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub async fn readiness_check(State(db): State<Database>) -> Result<impl IntoResponse> {
    database::check_health(&db).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "database": "connected"
        })),
    ))
}
