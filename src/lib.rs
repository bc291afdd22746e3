pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::services::AppState;

pub use crate::error::StatsError;

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/",
            get(handlers::health::health_check).post(handlers::metrics::region_metrics),
        )
        .with_state(state)
        // Region lists are unbounded; the request body is never capped.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
