//! WebAssembly module for the Crop Advisory Platform
//!
//! Provides client-side computation for:
//! - Geolocation state handling (one-shot position request)
//! - Offline crop recommendation shortlisting
//! - Offline farm input validation

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Default location label shown before any position fix
const DEFAULT_LOCATION: &str = "Hyderabad, India (Default)";

/// Label shown after a successful position fix
const CURRENT_LOCATION: &str = "Your Current Location";

/// Default coordinates (Hyderabad, India)
const DEFAULT_LATITUDE: f64 = 17.385;
const DEFAULT_LONGITUDE: f64 = 78.486;

/// One-shot geolocation request timeout in milliseconds
const GEO_TIMEOUT_MS: u32 = 10_000;

/// Accepted staleness of a cached position fix in milliseconds (5 minutes)
const GEO_MAX_AGE_MS: u32 = 300_000;

/// Browser-side location state.
///
/// Holds the coordinates and display label driving the dashboard. A failed
/// position request leaves the previously held location untouched and only
/// records an error message.
#[wasm_bindgen]
pub struct LocationTracker {
    latitude: f64,
    longitude: f64,
    location: String,
    error: Option<String>,
}

#[wasm_bindgen]
impl LocationTracker {
    /// Create a tracker holding the default location
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            location: DEFAULT_LOCATION.to_string(),
            error: None,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[wasm_bindgen(getter)]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[wasm_bindgen(getter)]
    pub fn location(&self) -> String {
        self.location.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn error(&self) -> Option<String> {
        self.error.clone()
    }

    /// Record a successful position fix
    pub fn record_position(&mut self, latitude: f64, longitude: f64) {
        if !latitude.is_finite() || !longitude.is_finite() {
            self.record_error("Received a non-finite position fix");
            return;
        }
        self.latitude = latitude;
        self.longitude = longitude;
        self.location = CURRENT_LOCATION.to_string();
        self.error = None;
    }

    /// Record a failed position request. Prior location state is kept.
    pub fn record_error(&mut self, message: &str) {
        let message = if message.trim().is_empty() {
            "Failed to get location"
        } else {
            message
        };
        self.error = Some(message.to_string());
    }
}

impl Default for LocationTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Issue a one-shot browser geolocation request.
///
/// The success and error callbacks are invoked exactly once by the browser.
/// Callers feed the outcome back into a [`LocationTracker`].
#[wasm_bindgen]
pub fn request_position(
    success: &js_sys::Function,
    error: &js_sys::Function,
) -> Result<(), JsValue> {
    let window =
        web_sys::window().ok_or_else(|| JsValue::from_str("no window object available"))?;
    let geolocation = window.navigator().geolocation()?;

    let options = web_sys::PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(GEO_TIMEOUT_MS);
    options.set_maximum_age(GEO_MAX_AGE_MS);

    geolocation.get_current_position_with_error_callback_and_options(
        success,
        Some(error),
        &options,
    )?;
    Ok(())
}

/// Shortlist crop recommendations offline.
///
/// Takes the advisory catalog and the farm input as JSON and returns the
/// selected recommendations as JSON: the last-grown crop excluded, at most
/// two entries, catalog order preserved.
#[wasm_bindgen]
pub fn shortlist_crops(catalog_json: &str, input_json: &str) -> Result<String, JsValue> {
    let catalog: Vec<CropRecommendation> = serde_json::from_str(catalog_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid catalog JSON: {}", e)))?;
    let input: FarmInput = serde_json::from_str(input_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid farm input JSON: {}", e)))?;

    let selected = shortlist(&catalog, &input);
    serde_json::to_string(&selected).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Validate a farm input record offline.
///
/// Returns `None` when the input is valid, otherwise the failure message.
#[wasm_bindgen]
pub fn farm_input_error(input_json: &str) -> Option<String> {
    let input: FarmInput = match serde_json::from_str(input_json) {
        Ok(input) => input,
        Err(e) => return Some(format!("Invalid farm input JSON: {}", e)),
    };
    validate_farm_input(&input).err().map(|e| e.to_string())
}
