//! Validation utilities for the Crop Advisory Platform

use crate::models::FarmInput;
use crate::types::GpsCoordinates;

// ============================================================================
// Farm Input Validations
// ============================================================================

/// Validate coordinates are finite and within geographic range
pub fn validate_coordinates(coords: &GpsCoordinates) -> Result<(), &'static str> {
    if !coords.latitude.is_finite() || !coords.longitude.is_finite() {
        return Err("Coordinates must be finite numbers");
    }
    if !(-90.0..=90.0).contains(&coords.latitude) {
        return Err("Latitude must be between -90 and 90");
    }
    if !(-180.0..=180.0).contains(&coords.longitude) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate field size is a positive finite number (hectares)
pub fn validate_field_size(field_size: f64) -> Result<(), &'static str> {
    if !field_size.is_finite() {
        return Err("Field size must be a finite number");
    }
    if field_size <= 0.0 {
        return Err("Field size must be greater than zero");
    }
    Ok(())
}

/// Validate confidence is a percentage
pub fn validate_confidence(confidence: u8) -> Result<(), &'static str> {
    if confidence > 100 {
        return Err("Confidence must be between 0 and 100");
    }
    Ok(())
}

/// Validate a complete farm input record
pub fn validate_farm_input(input: &FarmInput) -> Result<(), &'static str> {
    validate_coordinates(&input.coordinates)?;
    validate_field_size(input.field_size)?;
    if input.last_crop.trim().is_empty() {
        return Err("Last crop must not be empty");
    }
    Ok(())
}

// ============================================================================
// Catalog Constants
// ============================================================================

/// Crops the advisory form offers for selection
pub const SUPPORTED_CROPS: &[&str] = &[
    "Rice",
    "Maize",
    "Cotton",
    "Groundnut",
    "Tomato",
    "Chili",
    "Onion",
    "Potato",
    "Sugarcane",
    "Soybean",
];

/// Broad Indian growing regions the advisory form offers
pub const INDIAN_REGIONS: &[&str] = &[
    "North India",
    "South India",
    "Central India",
    "East India",
    "West India",
];

/// Check a crop name against the supported catalog
pub fn is_supported_crop(crop: &str) -> bool {
    SUPPORTED_CROPS.iter().any(|c| c.eq_ignore_ascii_case(crop))
}

/// Check a region against the known regions
pub fn is_known_region(region: &str) -> bool {
    INDIAN_REGIONS.iter().any(|r| r.eq_ignore_ascii_case(region))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SoilType;

    fn valid_input() -> FarmInput {
        FarmInput {
            last_crop: "Tomato".to_string(),
            soil_type: SoilType::Loamy,
            irrigation_available: true,
            field_size: 1.5,
            region: "South India".to_string(),
            coordinates: GpsCoordinates::new(17.385, 78.486),
        }
    }

    #[test]
    fn test_validate_coordinates_valid() {
        assert!(validate_coordinates(&GpsCoordinates::new(17.385, 78.486)).is_ok());
        assert!(validate_coordinates(&GpsCoordinates::new(-90.0, 180.0)).is_ok());
    }

    #[test]
    fn test_validate_coordinates_invalid() {
        assert!(validate_coordinates(&GpsCoordinates::new(f64::NAN, 0.0)).is_err());
        assert!(validate_coordinates(&GpsCoordinates::new(0.0, f64::NEG_INFINITY)).is_err());
        assert!(validate_coordinates(&GpsCoordinates::new(90.1, 0.0)).is_err());
        assert!(validate_coordinates(&GpsCoordinates::new(0.0, 180.1)).is_err());
    }

    #[test]
    fn test_validate_field_size() {
        assert!(validate_field_size(0.5).is_ok());
        assert!(validate_field_size(100.0).is_ok());
        assert!(validate_field_size(0.0).is_err());
        assert!(validate_field_size(-1.0).is_err());
        assert!(validate_field_size(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_confidence() {
        assert!(validate_confidence(0).is_ok());
        assert!(validate_confidence(100).is_ok());
        assert!(validate_confidence(101).is_err());
    }

    #[test]
    fn test_validate_farm_input_valid() {
        assert!(validate_farm_input(&valid_input()).is_ok());
    }

    #[test]
    fn test_validate_farm_input_empty_crop() {
        let mut input = valid_input();
        input.last_crop = "  ".to_string();
        assert!(validate_farm_input(&input).is_err());
    }

    #[test]
    fn test_validate_farm_input_bad_coordinates() {
        let mut input = valid_input();
        input.coordinates = GpsCoordinates::new(f64::NAN, 78.486);
        assert!(validate_farm_input(&input).is_err());
    }

    #[test]
    fn test_supported_crops() {
        assert!(is_supported_crop("Tomato"));
        assert!(is_supported_crop("tomato")); // Case insensitive
        assert!(!is_supported_crop("Durian"));
    }

    #[test]
    fn test_known_regions() {
        assert!(is_known_region("South India"));
        assert!(is_known_region("north india"));
        assert!(!is_known_region("Mars"));
    }
}
