mod error;
mod generate;
mod health;
mod metrics;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use self::generate::generate_handler;
use self::health::{health_handler, root_handler};
use self::metrics::metrics_handler;

// creating the router with routes, CORS open to any origin
pub fn router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/generate", post(generate_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
