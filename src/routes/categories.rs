use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::Category,
    utils::AppJson,
};

pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = state.categories.find_all().await?;

    Ok(Json(categories))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Category>> {
    let category = state
        .categories
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound(format!("Category {} not found", id)))?;

    Ok(Json(category))
}

pub async fn create_category(
    State(state): State<AppState>,
    AppJson(body): AppJson<Category>,
) -> Result<Response> {
    let errors = body.validation_errors();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let saved = state.categories.save(body).await?;
    tracing::info!(
        "The category with name {} has been created",
        saved.name.as_deref().unwrap_or_default()
    );

    let location = format!(
        "/api/categories/{}",
        saved.id.as_deref().unwrap_or_default()
    );

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(saved)).into_response())
}
