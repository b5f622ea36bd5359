//! Farm input models

use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// Soil types a farmer can report
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SoilType {
    Clay,
    Sandy,
    Loamy,
    Mixed,
}

/// User-supplied farm parameters driving crop recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmInput {
    pub last_crop: String,
    pub soil_type: SoilType,
    pub irrigation_available: bool,
    pub field_size: f64,
    pub region: String,
    pub coordinates: GpsCoordinates,
}
