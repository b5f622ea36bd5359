//! Weather data models
//!
//! Field names follow the Open-Meteo wire format so the provider response
//! deserializes directly into these records.

use serde::{Deserialize, Serialize};

/// Current conditions plus the hourly series for a location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub hourly: HourlySeries,
}

/// Current observed conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub wind_speed_10m: f64,
    pub weather_code: i32,
}

/// Hourly forecast series
///
/// Invariant: all sequences share the same length and index alignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub relative_humidity_2m: Vec<f64>,
    pub wind_speed_10m: Vec<f64>,
}

impl HourlySeries {
    /// Number of hourly entries
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// All hourly sequences have equal length
    pub fn is_aligned(&self) -> bool {
        let n = self.time.len();
        self.temperature_2m.len() == n
            && self.relative_humidity_2m.len() == n
            && self.wind_speed_10m.len() == n
    }
}

impl WeatherSnapshot {
    /// Snapshot upholds the hourly alignment invariant
    pub fn is_well_formed(&self) -> bool {
        self.hourly.is_aligned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(hours: usize) -> WeatherSnapshot {
        WeatherSnapshot {
            current: CurrentConditions {
                temperature_2m: 25.0,
                relative_humidity_2m: 65.0,
                wind_speed_10m: 12.3,
                weather_code: 0,
            },
            hourly: HourlySeries {
                time: vec!["2024-01-01T00:00".to_string(); hours],
                temperature_2m: vec![25.0; hours],
                relative_humidity_2m: vec![60.0; hours],
                wind_speed_10m: vec![10.0; hours],
            },
        }
    }

    #[test]
    fn test_aligned_series() {
        assert!(snapshot(24).is_well_formed());
        assert!(snapshot(0).is_well_formed());
    }

    #[test]
    fn test_misaligned_series() {
        let mut s = snapshot(24);
        s.hourly.temperature_2m.pop();
        assert!(!s.is_well_formed());
    }
}
