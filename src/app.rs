use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
};
use tower_http::cors::CorsLayer;

use crate::{
    config::{AdminConfig, AppConfig, Environment},
    error::Result,
    routes,
    storage::{self, FileStore},
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FileStore>,
    pub admin: Arc<AdminConfig>,
    pub environment: Environment,
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let store = storage::open(&config.storage);
    store.check_health().await?;

    let state = AppState {
        store: Arc::new(store),
        admin: Arc::new(config.admin.clone()),
        environment: config.environment,
    };

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
        .allow_credentials(true)
        .allow_origin(allowed_origins);

    let app = routes::create_router(&state)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .with_state(state);

    Ok(app)
}
