//! Weather domain values

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Crop;

/// Normalized current conditions for one advisory request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Free-text location as the user typed it; never geocoded
    pub location: String,
    pub crop: Crop,
    pub observed_at: DateTime<Utc>,
    /// Rounded to the nearest degree
    pub temperature_c: i32,
    /// Expected 0-100, not clamped
    pub humidity_percent: i32,
    /// Expected 0-100; 0 when the provider omits cloud cover
    pub cloud_percent: i32,
    pub condition: String,
    pub description: String,
    pub icon: String,
}

/// One forecast sample for the trend chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub timestamp: DateTime<Utc>,
    pub temperature_c: f64,
    pub humidity_percent: i32,
    pub cloud_percent: i32,
    pub condition: String,
}
