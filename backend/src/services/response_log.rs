//! In-memory log of user interaction responses
//!
//! The SPA posts form interactions for later analysis. Without durable
//! storage the log is append-only process memory.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// A stored user response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResponse {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub payload: serde_json::Value,
}

/// Append-only in-memory response log
#[derive(Clone)]
pub struct ResponseLog {
    inner: Arc<RwLock<Vec<StoredResponse>>>,
}

impl ResponseLog {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Store a payload stamped with the current time
    pub fn store(&self, payload: serde_json::Value) -> AppResult<StoredResponse> {
        let record = StoredResponse {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            payload,
        };

        let mut log = self
            .inner
            .write()
            .map_err(|_| AppError::Internal("response log lock poisoned".to_string()))?;
        log.push(record.clone());
        Ok(record)
    }

    /// The most recent records, newest first
    pub fn recent(&self, limit: usize) -> AppResult<Vec<StoredResponse>> {
        let log = self
            .inner
            .read()
            .map_err(|_| AppError::Internal("response log lock poisoned".to_string()))?;
        Ok(log.iter().rev().take(limit).cloned().collect())
    }
}

impl Default for ResponseLog {
    fn default() -> Self {
        Self::new()
    }
}
