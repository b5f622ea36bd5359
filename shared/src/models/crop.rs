//! Crop recommendation models and selection

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::FarmInput;

/// Water requirement classes for a candidate crop
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WaterRequirement {
    Low,
    Medium,
    High,
}

/// A static advisory record for a candidate crop
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecommendation {
    pub crop: String,
    /// Confidence percentage, 0-100
    pub confidence: u8,
    pub rationale: String,
    pub planting_window: String,
    pub water_requirement: WaterRequirement,
    pub expected_yield: String,
    pub market_price: Decimal,
}

/// Maximum number of recommendations returned per request
pub const MAX_RECOMMENDATIONS: usize = 2;

/// Select recommendations for a farm from an ordered catalog.
///
/// Excludes the entry whose crop equals the farm's last-grown crop, keeps
/// the catalog order, and truncates to [`MAX_RECOMMENDATIONS`] entries.
pub fn shortlist(catalog: &[CropRecommendation], input: &FarmInput) -> Vec<CropRecommendation> {
    catalog
        .iter()
        .filter(|r| r.crop != input.last_crop)
        .take(MAX_RECOMMENDATIONS)
        .cloned()
        .collect()
}
