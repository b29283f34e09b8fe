//! WebAssembly module for Krishi Smart Advisory
//!
//! Provides client-side computation for:
//! - Risk classification and advisory selection
//! - Crop catalogue and form validation

use wasm_bindgen::prelude::*;

use shared::models::{assess_risk, crop_from_str, Crop, CROP_CATALOGUE};
use shared::validation::validate_location;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&"krishi advisory wasm initialized".into());
}

/// Classify current conditions for a crop; returns the assessment as JSON
#[wasm_bindgen]
pub fn assess_crop_risk(
    temperature_c: i32,
    humidity_percent: i32,
    cloud_percent: i32,
    crop: &str,
) -> Result<String, JsValue> {
    let assessment = assess_risk(
        temperature_c,
        humidity_percent,
        cloud_percent,
        crop_from_str(crop),
    );

    serde_json::to_string(&assessment)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize assessment: {}", e)))
}

/// Headline risk level for current conditions ("Low", "Medium", "High")
#[wasm_bindgen]
pub fn risk_level_for(temperature_c: i32, humidity_percent: i32, cloud_percent: i32) -> String {
    assess_risk(temperature_c, humidity_percent, cloud_percent, Crop::Other)
        .risk_level
        .as_str()
        .to_string()
}

/// Canonical display name for a crop selection; unknown input maps to "Other"
#[wasm_bindgen]
pub fn crop_display_name(crop: &str) -> String {
    crop_from_str(crop).as_str().to_string()
}

/// Whether a location string is acceptable for the form
#[wasm_bindgen]
pub fn is_valid_location(location: &str) -> bool {
    validate_location(location).is_ok()
}

/// Catalogued crops for building the selection form
#[wasm_bindgen]
pub fn catalogued_crops() -> js_sys::Array {
    CROP_CATALOGUE
        .iter()
        .map(|crop| JsValue::from_str(crop.as_str()))
        .collect()
}
