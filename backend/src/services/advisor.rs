//! Crop recommendation service
//!
//! Validates the farm input and selects from a static advisory catalog.

use rust_decimal::Decimal;

use crate::error::{AppError, AppResult};
use shared::models::{shortlist, CropRecommendation, FarmInput, WaterRequirement};
use shared::validation::{validate_coordinates, validate_field_size};

/// Crop recommendation service
#[derive(Clone)]
pub struct AdvisorService {
    catalog: Vec<CropRecommendation>,
}

impl Default for AdvisorService {
    fn default() -> Self {
        Self::new()
    }
}

impl AdvisorService {
    /// Create the service with the built-in advisory catalog
    pub fn new() -> Self {
        Self {
            catalog: advisory_catalog(),
        }
    }

    /// The full ordered catalog
    pub fn catalog(&self) -> &[CropRecommendation] {
        &self.catalog
    }

    /// Recommend crops for a farm.
    ///
    /// Excludes the last-grown crop and returns at most two entries in
    /// catalog order.
    pub fn recommend(&self, input: &FarmInput) -> AppResult<Vec<CropRecommendation>> {
        validate_input(input)?;
        Ok(shortlist(&self.catalog, input))
    }
}

fn validate_input(input: &FarmInput) -> AppResult<()> {
    validate_coordinates(&input.coordinates).map_err(|message| AppError::Validation {
        field: "coordinates".to_string(),
        message: message.to_string(),
    })?;
    validate_field_size(input.field_size).map_err(|message| AppError::Validation {
        field: "fieldSize".to_string(),
        message: message.to_string(),
    })?;
    if input.last_crop.trim().is_empty() {
        return Err(AppError::Validation {
            field: "lastCrop".to_string(),
            message: "Last crop must not be empty".to_string(),
        });
    }
    Ok(())
}

/// The static advisory catalog, ordered by presentation priority
fn advisory_catalog() -> Vec<CropRecommendation> {
    vec![
        CropRecommendation {
            crop: "Tomato".to_string(),
            confidence: 85,
            rationale: "High market demand, suitable soil type, adequate water availability"
                .to_string(),
            planting_window: "October - November".to_string(),
            water_requirement: WaterRequirement::Medium,
            expected_yield: "25-30 tons/hectare".to_string(),
            market_price: Decimal::from(45),
        },
        CropRecommendation {
            crop: "Cotton".to_string(),
            confidence: 72,
            rationale: "Traditional crop for region, good soil match, irrigation support needed"
                .to_string(),
            planting_window: "May - June".to_string(),
            water_requirement: WaterRequirement::High,
            expected_yield: "15-18 quintals/hectare".to_string(),
            market_price: Decimal::from(6200),
        },
        CropRecommendation {
            crop: "Groundnut".to_string(),
            confidence: 78,
            rationale: "Drought resistant, improves soil nitrogen, stable market price"
                .to_string(),
            planting_window: "June - July".to_string(),
            water_requirement: WaterRequirement::Low,
            expected_yield: "12-15 quintals/hectare".to_string(),
            market_price: Decimal::from(5800),
        },
    ]
}
