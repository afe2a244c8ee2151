//! Route definitions

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use infrastructure::ServerConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::{handlers, middleware::RequestIdLayer, state::AppState};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/weather", get(handlers::weather::search_city))
        .route("/api/sample", get(handlers::sample::sample))
        // Health and status endpoints
        .route("/api/health", get(handlers::health::health_check))
        .route("/api/ready", get(handlers::health::readiness_check))
        .with_state(state)
}

/// Router with tracing, request ids and CORS applied
pub fn app(state: AppState, server: &ServerConfig) -> Router {
    let router = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer::new());

    if server.cors_enabled {
        router.layer(cors_layer(&server.allowed_origins))
    } else {
        router
    }
}

/// Any origin when `allowed_origins` is empty, otherwise only those listed
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            },
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers(Any)
}
