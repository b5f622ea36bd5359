//! HTTP handlers for crop recommendations

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::AppState;
use shared::models::{CropRecommendation, FarmInput};

/// Recommend crops for the submitted farm input
pub async fn recommend_crops(
    State(state): State<AppState>,
    Json(input): Json<FarmInput>,
) -> AppResult<Json<Vec<CropRecommendation>>> {
    let recommendations = state.advisor.recommend(&input)?;
    Ok(Json(recommendations))
}
