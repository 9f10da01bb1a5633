//! HTTP router setup.

use crate::handlers;
use crate::middleware;
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the application router.
pub fn create(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .route("/certificates", get(handlers::list_certificates))
        .route("/certificates/{id}", get(handlers::get_certificate))
        .route("/api/certificate", get(handlers::list_static_certificates))
        .route("/api/certificate/ids", get(handlers::static_certificate_ids))
        .route("/api/certificate/{id}", get(handlers::get_static_certificate))
        .layer(axum::middleware::from_fn(middleware::inject_request_id))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
