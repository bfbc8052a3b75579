use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::get,
};
use tower_http::cors::CorsLayer;

use crate::{
    config::AppConfig,
    database,
    error::Result,
    routes, seed,
    services::{CategoryService, MongoCategories, MongoProducts, ProductService},
};

/// Handler dependencies, injected at startup. Handlers never talk to the
/// store directly.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductService>,
    pub categories: Arc<dyn CategoryService>,
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let db = database::connect(&config.database).await?;

    let state = AppState {
        products: Arc::new(MongoProducts::new(&db)),
        categories: Arc::new(MongoCategories::new(&db)),
    };

    {
        let db = db.clone();
        let state = state.clone();
        tokio::spawn(async move {
            seed::run(&db, state.categories.as_ref(), state.products.as_ref()).await;
        });
    }

    let allowed_origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|_| {
                crate::error::AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_origin(allowed_origins);

    let app = routes::create_router()
        .with_state(state)
        .merge(
            Router::new()
                .route("/health/ready", get(routes::readiness_check))
                .with_state(db),
        )
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors);

    Ok(app)
}
