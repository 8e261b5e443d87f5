//! Axum router: Maps all URL paths to handlers.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    api::{api_config, api_score, api_simulate, health},
    dashboard::dashboard,
    simulate::simulate_page,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",         get(dashboard))
        .route("/simulate", get(simulate_page))

        // API endpoints
        .route("/api/score",    get(api_score))
        .route("/api/simulate", get(api_simulate))
        .route("/api/config",   get(api_config))
        .route("/health",       get(health))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
