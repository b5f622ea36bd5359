//! HTTP handlers for farm alerts

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::AppState;
use shared::models::{Alert, AlertSeverity};

/// Query parameters for listing alerts
#[derive(Debug, Deserialize)]
pub struct AlertQuery {
    pub severity: Option<AlertSeverity>,
}

/// List active alerts, optionally filtered by severity
pub async fn list_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertQuery>,
) -> AppResult<Json<Vec<Alert>>> {
    let alerts = state.alerts.list(query.severity)?;
    Ok(Json(alerts))
}

/// Mark an alert as resolved, removing it from the feed
pub async fn resolve_alert(
    State(state): State<AppState>,
    Path(alert_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    state.alerts.resolve(alert_id)?;
    Ok(Json(()))
}
