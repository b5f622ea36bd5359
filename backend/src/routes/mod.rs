//! Route definitions for the Crop Advisory Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Weather retrieval (fallback path included)
        .route("/weather", get(handlers::get_weather))
        // Crop recommendations
        .route("/crop/recommend", post(handlers::recommend_crops))
        // Farm alerts
        .nest("/alerts", alert_routes())
        // User response logging
        .route(
            "/store-response",
            get(handlers::list_responses).post(handlers::store_response),
        )
}

/// Alert feed routes
fn alert_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_alerts))
        .route("/:alert_id/resolve", post(handlers::resolve_alert))
}
