//! Crop Advisory Platform - Backend
//!
//! Advisory services for smallholder farmers: weather with graceful
//! fallback, crop recommendations, farm alerts, and response logging.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use services::{AdvisorService, AlertStore, ResponseLog, WeatherService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherService,
    pub advisor: AdvisorService,
    pub alerts: AlertStore,
    pub responses: ResponseLog,
}

impl AppState {
    /// Build the application state from configuration
    pub fn new(config: Config) -> error::AppResult<Self> {
        Ok(Self {
            weather: WeatherService::new(&config.weather)?,
            advisor: AdvisorService::new(),
            alerts: AlertStore::seeded(),
            responses: ResponseLog::new(),
            config: Arc::new(config),
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration: the browser SPA is served from a separate origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Crop Advisory Platform API v1.0"
}
