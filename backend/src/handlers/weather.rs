//! HTTP handlers for weather retrieval

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::AppState;
use shared::models::WeatherSnapshot;
use shared::types::GpsCoordinates;
use shared::validation::validate_coordinates;

/// Query parameters for weather retrieval
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub latitude: f64,
    pub longitude: f64,
}

/// Get the weather snapshot for a location.
///
/// Provider failures never surface here; the service substitutes the
/// synthetic fallback snapshot. Only invalid coordinates are rejected.
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<WeatherSnapshot>> {
    let coords = GpsCoordinates::new(query.latitude, query.longitude);
    validate_coordinates(&coords).map_err(|message| AppError::Validation {
        field: "coordinates".to_string(),
        message: message.to_string(),
    })?;

    let snapshot = state
        .weather
        .current_snapshot(coords.latitude, coords.longitude)
        .await;
    Ok(Json(snapshot))
}
