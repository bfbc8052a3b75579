use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use serde_json::json;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{ImageProduct, Product},
    utils::AppJson,
};

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.products.find_all().await?;

    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let product = state
        .products
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound(format!("Product {} not found", id)))?;

    Ok(Json(product))
}

/// Unwraps the create/update envelope: decodes the base64 image, defaults the
/// creation timestamp, and rejects missing required fields.
fn prepare_product(dto: ImageProduct) -> Result<Product> {
    let image = dto
        .image_product
        .as_deref()
        .map(|encoded| {
            STANDARD
                .decode(encoded)
                .map_err(|_| AppError::BadRequest("imageProduct is not valid base64".to_string()))
        })
        .transpose()?;

    let Some(mut product) = dto.product else {
        return Err(AppError::Validation(vec![
            "product: must not be null".to_string(),
        ]));
    };

    if let Some(bytes) = image {
        product.image = Some(bytes);
    }
    if product.create_at.is_none() {
        product.create_at = Some(Utc::now());
    }

    let errors = product.validation_errors();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    Ok(product)
}

fn location(id: Option<&str>) -> (header::HeaderName, String) {
    (
        header::LOCATION,
        format!("/api/products/{}", id.unwrap_or_default()),
    )
}

pub async fn create_product(
    State(state): State<AppState>,
    AppJson(dto): AppJson<ImageProduct>,
) -> Result<Response> {
    let product = prepare_product(dto)?;

    let saved = state.products.save(product).await?;
    tracing::info!(
        "The product {} has been created",
        saved.name.as_deref().unwrap_or_default()
    );

    Ok((
        StatusCode::CREATED,
        [location(saved.id.as_deref())],
        Json(saved),
    )
        .into_response())
}

/// Same creation logic as [`create_product`], but with structured envelopes:
/// `{product, message, timestamp}` on success, `{errors, timestamp, status}`
/// on validation failure.
pub async fn create_product_validated(
    State(state): State<AppState>,
    AppJson(dto): AppJson<ImageProduct>,
) -> Result<Response> {
    let product = match prepare_product(dto) {
        Ok(product) => product,
        Err(AppError::Validation(errors)) => {
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "errors": errors,
                    "timestamp": Utc::now(),
                    "status": StatusCode::BAD_REQUEST.as_u16(),
                })),
            )
                .into_response());
        }
        Err(other) => return Err(other),
    };

    let saved = state.products.save(product).await?;
    let message = format!(
        "The product {} was created successfully",
        saved.name.as_deref().unwrap_or_default()
    );
    tracing::info!("{}", message);

    Ok((
        StatusCode::CREATED,
        [location(saved.id.as_deref())],
        Json(json!({
            "product": saved,
            "message": message,
            "timestamp": Utc::now(),
        })),
    )
        .into_response())
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<Product>,
) -> Result<Response> {
    let errors = body.validation_errors();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let mut stored = state
        .products
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound(format!("Product {} not found", id)))?;

    stored.merge_update(body);

    let saved = state.products.save(stored).await?;
    tracing::info!(
        "The product {} has been updated",
        saved.name.as_deref().unwrap_or_default()
    );

    // 201 on update is part of the published contract; consumers assert it.
    Ok((
        StatusCode::CREATED,
        [location(saved.id.as_deref())],
        Json(saved),
    )
        .into_response())
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    match state.products.find_by_id(&id).await? {
        Some(product) => {
            tracing::info!(
                "Deleting product with id {} and name {}",
                id,
                product.name.as_deref().unwrap_or_default()
            );
            state.products.delete(&product).await?;
            Ok(StatusCode::NO_CONTENT)
        }
        None => {
            tracing::warn!("Product with id {} not found", id);
            Err(AppError::NotFound(format!("Product {} not found", id)))
        }
    }
}
