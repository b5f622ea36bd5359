//! HTTP handlers for user response logging

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::services::response_log::StoredResponse;
use crate::AppState;

/// Store a user interaction payload
pub async fn store_response(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<Json<StoredResponse>> {
    let record = state.responses.store(payload)?;
    Ok(Json(record))
}

/// Query parameters for listing stored responses
#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<usize>,
}

/// List recently stored responses, newest first
pub async fn list_responses(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> AppResult<Json<Vec<StoredResponse>>> {
    let records = state.responses.recent(query.limit.unwrap_or(20))?;
    Ok(Json(records))
}
