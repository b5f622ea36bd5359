//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both components are finite and within geographic range
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        assert!(GpsCoordinates::new(17.385, 78.486).is_valid());
        assert!(GpsCoordinates::new(-90.0, 180.0).is_valid());
        assert!(GpsCoordinates::new(0.0, 0.0).is_valid());
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(!GpsCoordinates::new(f64::NAN, 78.486).is_valid());
        assert!(!GpsCoordinates::new(17.385, f64::INFINITY).is_valid());
        assert!(!GpsCoordinates::new(91.0, 0.0).is_valid());
        assert!(!GpsCoordinates::new(0.0, -181.0).is_valid());
    }
}
