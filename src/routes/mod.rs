//! HTTP routes for WordQuest
//!
//! This module defines all HTTP endpoints exposed by the proxy.

pub mod docs;
pub mod gemini;
pub mod health;
pub mod metrics;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{any, get},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Path of the action endpoint
pub const ACTION_PATH: &str = "/api/gemini";

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Any method is routed here so the handler can answer 405 itself.
    // Images travel inline as base64, hence the raised body limit.
    let action_routes = Router::new()
        .route(ACTION_PATH, any(gemini::handle_action))
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes));

    // Public routes (health checks, metrics)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .route("/metrics", get(metrics::prometheus_metrics));

    Router::new()
        .merge(public_routes)
        .merge(action_routes)
        .merge(docs::create_docs_router())
        // Global middleware (applied to all routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
