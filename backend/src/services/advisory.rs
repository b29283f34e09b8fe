//! Advisory generation service
//!
//! Orchestrates the two weather fetches, normalizes the readings into a
//! snapshot, and runs the risk classifier.

use crate::error::AppResult;
use crate::external::weather::CurrentConditions;
use crate::external::WeatherClient;
use crate::models::{AdvisoryReport, Crop, WeatherSnapshot};

/// Advisory service owning the weather client
#[derive(Clone)]
pub struct AdvisoryService {
    weather: WeatherClient,
}

impl AdvisoryService {
    /// Create a new AdvisoryService instance
    pub fn new(weather: WeatherClient) -> Self {
        Self { weather }
    }

    /// Build the advisory report for a location and crop.
    ///
    /// The current-weather and forecast calls are independent and run
    /// concurrently; failure of either surfaces as the generic
    /// service-unavailable error with no retry.
    pub async fn generate(&self, location: &str, crop: Crop) -> AppResult<AdvisoryReport> {
        let (current, forecast) = tokio::join!(
            self.weather.get_current_weather(location),
            self.weather.get_forecast(location),
        );
        let current = current?;
        let forecast = forecast?;

        let snapshot = build_snapshot(location, crop, current);
        let assessment = snapshot.assess();

        tracing::debug!(
            "advisory for {} ({}): level={} score={}",
            snapshot.location,
            snapshot.crop,
            assessment.risk_level,
            assessment.risk_score
        );

        Ok(AdvisoryReport {
            snapshot,
            forecast: forecast.points,
            assessment,
        })
    }
}

/// Normalize raw current conditions into the classifier's snapshot
fn build_snapshot(location: &str, crop: Crop, current: CurrentConditions) -> WeatherSnapshot {
    WeatherSnapshot {
        location: location.to_string(),
        crop,
        observed_at: current.observed_at,
        // Rounded to the nearest degree for display and classification
        temperature_c: current.temperature_c.round() as i32,
        humidity_percent: current.humidity_percent,
        cloud_percent: current.cloud_percent,
        condition: current.condition,
        description: current.description,
        icon: current.icon,
    }
}
