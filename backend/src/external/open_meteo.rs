//! Open-Meteo API client for fetching weather data
//!
//! Single-attempt fetch of current conditions plus a 24-hour forecast.
//! No retry and no caching; the caller decides how to degrade.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::error::{AppError, AppResult};
use shared::models::{CurrentConditions, HourlySeries, WeatherSnapshot};

/// Variables requested in the `current` section
const CURRENT_VARS: &str = "temperature_2m,relative_humidity_2m,wind_speed_10m,weather_code";

/// Variables requested in the `hourly` section
const HOURLY_VARS: &str = "temperature_2m,relative_humidity_2m,wind_speed_10m";

/// Hours of forecast requested
const FORECAST_HOURS: u32 = 24;

/// Open-Meteo API client
#[derive(Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

/// Open-Meteo forecast response
#[derive(Debug, Deserialize)]
struct OMForecastResponse {
    current: OMCurrent,
    hourly: OMHourly,
}

#[derive(Debug, Deserialize)]
struct OMCurrent {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    wind_speed_10m: f64,
    weather_code: i32,
}

#[derive(Debug, Deserialize)]
struct OMHourly {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
    relative_humidity_2m: Vec<f64>,
    wind_speed_10m: Vec<f64>,
}

impl OpenMeteoClient {
    /// Create a new OpenMeteoClient
    pub fn new(base_url: String, request_timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client build failed: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Create a client with the default timeout (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch current conditions and the hourly forecast by GPS coordinates
    pub async fn fetch_forecast(&self, latitude: f64, longitude: f64) -> AppResult<WeatherSnapshot> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&current={}&hourly={}&forecast_hours={}",
            self.base_url, latitude, longitude, CURRENT_VARS, HOURLY_VARS, FORECAST_HOURS
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::WeatherProvider(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherProvider(format!(
                "status {} - {}",
                status, body
            )));
        }

        let data: OMForecastResponse = response
            .json()
            .await
            .map_err(|e| AppError::WeatherProvider(format!("malformed response: {}", e)))?;

        let snapshot = convert_forecast_response(data);
        if !snapshot.is_well_formed() {
            return Err(AppError::WeatherProvider(
                "hourly sequences are misaligned".to_string(),
            ));
        }

        Ok(snapshot)
    }
}

/// Convert an Open-Meteo response to our snapshot format
fn convert_forecast_response(data: OMForecastResponse) -> WeatherSnapshot {
    WeatherSnapshot {
        current: CurrentConditions {
            temperature_2m: data.current.temperature_2m,
            relative_humidity_2m: data.current.relative_humidity_2m,
            wind_speed_10m: data.current.wind_speed_10m,
            weather_code: data.current.weather_code,
        },
        hourly: HourlySeries {
            time: data.hourly.time,
            temperature_2m: data.hourly.temperature_2m,
            relative_humidity_2m: data.hourly.relative_humidity_2m,
            wind_speed_10m: data.hourly.wind_speed_10m,
        },
    }
}
