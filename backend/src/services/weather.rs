//! Weather service with deterministic fallback
//!
//! Wraps the Open-Meteo client. Any provider failure (network error,
//! non-success status, malformed body) degrades to a synthetic snapshot so
//! the advisory endpoints never go dark.

use chrono::{DateTime, Duration, SecondsFormat, Timelike, Utc};
use std::time::Duration as StdDuration;

use crate::config::WeatherConfig;
use crate::error::AppResult;
use crate::external::OpenMeteoClient;
use shared::models::{CurrentConditions, HourlySeries, WeatherSnapshot};

/// Current temperature reported by the fallback snapshot
pub const FALLBACK_TEMPERATURE: f64 = 28.5;

/// Current humidity reported by the fallback snapshot
pub const FALLBACK_HUMIDITY: f64 = 65.0;

/// Current wind speed reported by the fallback snapshot
pub const FALLBACK_WIND_SPEED: f64 = 12.3;

/// Hours of synthetic forecast generated on fallback
const FALLBACK_HOURS: usize = 24;

/// Weather service for retrieving snapshots
#[derive(Clone)]
pub struct WeatherService {
    client: OpenMeteoClient,
}

impl WeatherService {
    /// Create a new WeatherService from configuration
    pub fn new(config: &WeatherConfig) -> AppResult<Self> {
        let client = OpenMeteoClient::new(
            config.base_url.clone(),
            StdDuration::from_secs(config.request_timeout_secs),
        )?;
        Ok(Self { client })
    }

    /// Create a WeatherService around an existing client (for testing)
    pub fn with_client(client: OpenMeteoClient) -> Self {
        Self { client }
    }

    /// Retrieve the weather snapshot for the given coordinates.
    ///
    /// On provider success the parsed snapshot is returned unmodified. On
    /// any failure a deterministic synthetic snapshot takes its place.
    /// Single attempt, no retry.
    pub async fn current_snapshot(&self, latitude: f64, longitude: f64) -> WeatherSnapshot {
        match self.client.fetch_forecast(latitude, longitude).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Weather provider failed, serving fallback: {}", e);
                fallback_snapshot(Utc::now())
            }
        }
    }
}

/// Build the synthetic fallback snapshot.
///
/// The hourly series starts at the given instant's hour and its values are a
/// fixed function of the hour index, so repeated failures yield the same
/// fallback shape.
pub fn fallback_snapshot(start: DateTime<Utc>) -> WeatherSnapshot {
    let first_hour = start
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(start);

    let mut time = Vec::with_capacity(FALLBACK_HOURS);
    let mut temperature = Vec::with_capacity(FALLBACK_HOURS);
    let mut humidity = Vec::with_capacity(FALLBACK_HOURS);
    let mut wind = Vec::with_capacity(FALLBACK_HOURS);

    for i in 0..FALLBACK_HOURS {
        let h = i as f64;
        let stamp = first_hour + Duration::hours(i as i64);
        time.push(stamp.to_rfc3339_opts(SecondsFormat::Secs, true));
        temperature.push(25.0 + (h / 4.0).sin() * 8.0);
        humidity.push(60.0 + (h / 3.0).sin() * 15.0);
        wind.push(10.0 + (h / 5.0).sin() * 5.0);
    }

    WeatherSnapshot {
        current: CurrentConditions {
            temperature_2m: FALLBACK_TEMPERATURE,
            relative_humidity_2m: FALLBACK_HUMIDITY,
            wind_speed_10m: FALLBACK_WIND_SPEED,
            weather_code: 0,
        },
        hourly: HourlySeries {
            time,
            temperature_2m: temperature,
            relative_humidity_2m: humidity,
            wind_speed_10m: wind,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_well_formed() {
        let snapshot = fallback_snapshot(Utc::now());
        assert!(snapshot.is_well_formed());
        assert_eq!(snapshot.hourly.len(), FALLBACK_HOURS);
    }

    #[test]
    fn test_fallback_current_values() {
        let snapshot = fallback_snapshot(Utc::now());
        assert_eq!(snapshot.current.temperature_2m, FALLBACK_TEMPERATURE);
        assert_eq!(snapshot.current.relative_humidity_2m, FALLBACK_HUMIDITY);
        assert_eq!(snapshot.current.wind_speed_10m, FALLBACK_WIND_SPEED);
        assert_eq!(snapshot.current.weather_code, 0);
    }

    #[test]
    fn test_fallback_series_is_deterministic() {
        let start = Utc::now();
        let a = fallback_snapshot(start);
        let b = fallback_snapshot(start);
        assert_eq!(a.hourly.temperature_2m, b.hourly.temperature_2m);
        assert_eq!(a.hourly.relative_humidity_2m, b.hourly.relative_humidity_2m);
        assert_eq!(a.hourly.wind_speed_10m, b.hourly.wind_speed_10m);
        assert_eq!(a.hourly.time, b.hourly.time);
    }

    #[test]
    fn test_fallback_first_hour_values() {
        // sin(0) = 0, so hour zero carries the series baselines
        let snapshot = fallback_snapshot(Utc::now());
        assert_eq!(snapshot.hourly.temperature_2m[0], 25.0);
        assert_eq!(snapshot.hourly.relative_humidity_2m[0], 60.0);
        assert_eq!(snapshot.hourly.wind_speed_10m[0], 10.0);
    }

    #[test]
    fn test_fallback_values_stay_in_band() {
        let snapshot = fallback_snapshot(Utc::now());
        for t in &snapshot.hourly.temperature_2m {
            assert!((17.0..=33.0).contains(t));
        }
        for h in &snapshot.hourly.relative_humidity_2m {
            assert!((45.0..=75.0).contains(h));
        }
        for w in &snapshot.hourly.wind_speed_10m {
            assert!((5.0..=15.0).contains(w));
        }
    }
}
