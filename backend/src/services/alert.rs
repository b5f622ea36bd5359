//! In-memory farm alert store
//!
//! The platform has no durable storage; alerts live for the lifetime of the
//! process and are seeded with the advisory feed shown on first load.

use chrono::{Duration, Utc};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::{Alert, AlertSeverity, AlertType};

/// In-memory store of active farm alerts
#[derive(Clone)]
pub struct AlertStore {
    inner: Arc<RwLock<Vec<Alert>>>,
}

impl AlertStore {
    /// Create a store seeded with the initial advisory feed
    pub fn seeded() -> Self {
        Self {
            inner: Arc::new(RwLock::new(seed_alerts())),
        }
    }

    /// List alerts, newest first, optionally filtered by severity
    pub fn list(&self, severity: Option<AlertSeverity>) -> AppResult<Vec<Alert>> {
        let alerts = self
            .inner
            .read()
            .map_err(|_| AppError::Internal("alert store lock poisoned".to_string()))?;

        let mut result: Vec<Alert> = alerts
            .iter()
            .filter(|a| severity.map_or(true, |s| a.severity == s))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(result)
    }

    /// Resolve (remove) an alert by id
    pub fn resolve(&self, id: Uuid) -> AppResult<()> {
        let mut alerts = self
            .inner
            .write()
            .map_err(|_| AppError::Internal("alert store lock poisoned".to_string()))?;

        let before = alerts.len();
        alerts.retain(|a| a.id != id);
        if alerts.len() == before {
            return Err(AppError::NotFound("Alert".to_string()));
        }
        Ok(())
    }
}

/// Initial advisory feed, stamped relative to process start
fn seed_alerts() -> Vec<Alert> {
    let now = Utc::now();
    vec![
        Alert {
            id: Uuid::new_v4(),
            alert_type: AlertType::Pest,
            severity: AlertSeverity::High,
            title: "Pest Activity Detected".to_string(),
            message: "High aphid activity detected in tomato field. Immediate action recommended."
                .to_string(),
            action_required: true,
            timestamp: now - Duration::hours(2),
        },
        Alert {
            id: Uuid::new_v4(),
            alert_type: AlertType::Weather,
            severity: AlertSeverity::Medium,
            title: "Heavy Rain Forecast".to_string(),
            message: "Heavy rainfall expected in 48 hours. Consider harvesting mature crops."
                .to_string(),
            action_required: true,
            timestamp: now - Duration::hours(6),
        },
        Alert {
            id: Uuid::new_v4(),
            alert_type: AlertType::Market,
            severity: AlertSeverity::Low,
            title: "Price Drop Alert".to_string(),
            message: "Cotton prices have dropped by 8% in the last week.".to_string(),
            action_required: false,
            timestamp: now - Duration::hours(24),
        },
        Alert {
            id: Uuid::new_v4(),
            alert_type: AlertType::Drought,
            severity: AlertSeverity::Medium,
            title: "Soil Moisture Low".to_string(),
            message: "Soil moisture levels below optimal range. Consider increasing irrigation."
                .to_string(),
            action_required: true,
            timestamp: now - Duration::hours(4),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store_lists_all() {
        let store = AlertStore::seeded();
        let alerts = store.list(None).unwrap();
        assert_eq!(alerts.len(), 4);
    }

    #[test]
    fn test_list_is_newest_first() {
        let store = AlertStore::seeded();
        let alerts = store.list(None).unwrap();
        for pair in alerts.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn test_list_filters_by_severity() {
        let store = AlertStore::seeded();
        let medium = store.list(Some(AlertSeverity::Medium)).unwrap();
        assert_eq!(medium.len(), 2);
        assert!(medium.iter().all(|a| a.severity == AlertSeverity::Medium));
    }

    #[test]
    fn test_resolve_removes_alert() {
        let store = AlertStore::seeded();
        let id = store.list(None).unwrap()[0].id;
        store.resolve(id).unwrap();
        assert_eq!(store.list(None).unwrap().len(), 3);
        // Second resolve of the same id reports not found
        assert!(matches!(store.resolve(id), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_resolve_unknown_id() {
        let store = AlertStore::seeded();
        assert!(store.resolve(Uuid::new_v4()).is_err());
    }
}
