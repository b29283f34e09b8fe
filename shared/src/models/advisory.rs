//! Risk classification and advisory selection
//!
//! The classifier is a pure decision function: the same readings always map
//! to the same assessment, with no state between calls.

use serde::{Deserialize, Serialize};

use crate::models::{Crop, ForecastPoint, WeatherSnapshot};

/// Headline risk classification shown to the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of classifying one snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskAssessment {
    /// Additive band score; reported alongside the level but not consulted
    /// when deriving it
    pub risk_score: i32,
    pub risk_level: RiskLevel,
    pub advisory_text: String,
    pub prediction_text: String,
}

/// Full advisory response for one request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryReport {
    pub snapshot: WeatherSnapshot,
    pub forecast: Vec<ForecastPoint>,
    pub assessment: RiskAssessment,
}

/// Classify current conditions for a crop.
///
/// Total over all integer inputs: out-of-range readings still classify, and
/// callers treat missing numeric fields as 0 before calling.
pub fn assess_risk(
    temperature_c: i32,
    humidity_percent: i32,
    cloud_percent: i32,
    crop: Crop,
) -> RiskAssessment {
    let mut risk_score = 0;

    if temperature_c > 38 {
        risk_score += 35;
    } else if temperature_c > 32 {
        risk_score += 20;
    }

    // Humidity and cloud bands stack (90% humidity adds both +30 and +15);
    // only the temperature bands are mutually exclusive.
    if humidity_percent > 85 {
        risk_score += 30;
    }
    if humidity_percent > 70 {
        risk_score += 15;
    }
    if cloud_percent > 80 {
        risk_score += 35;
    }
    if cloud_percent > 60 {
        risk_score += 20;
    }

    // The level comes from these thresholds alone; the accumulated score is
    // reported but never consulted, and humidity never moves the level.
    let risk_level = if temperature_c > 38 || cloud_percent > 70 {
        RiskLevel::High
    } else if temperature_c > 32 || cloud_percent > 50 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    let (advisory, prediction) = advisory_for(risk_level, crop);

    RiskAssessment {
        risk_score,
        risk_level,
        advisory_text: advisory.to_string(),
        prediction_text: prediction.to_string(),
    }
}

impl WeatherSnapshot {
    /// Classify this snapshot
    pub fn assess(&self) -> RiskAssessment {
        assess_risk(
            self.temperature_c,
            self.humidity_percent,
            self.cloud_percent,
            self.crop,
        )
    }
}

/// Advisory and prediction strings for a (level, crop) pair.
///
/// Rice, Wheat, and Maize carry tailored High-risk messages; Rice and Wheat
/// carry tailored Medium-risk messages. Everything else falls back to the
/// generic pair for that level, and Low risk is the same for every crop.
pub fn advisory_for(level: RiskLevel, crop: Crop) -> (&'static str, &'static str) {
    match (level, crop) {
        (RiskLevel::High, Crop::Rice) => (
            "High moisture and cloud cover detected. Monitor for fungal diseases and ensure field drainage.",
            "High chance of crop disease in next 24 hours.",
        ),
        (RiskLevel::High, Crop::Wheat) => (
            "High temperature stress possible. Increase irrigation and monitor leaf dryness.",
            "Yield stress risk in next 24 hours.",
        ),
        (RiskLevel::High, Crop::Maize) => (
            "High weather instability detected. Protect young plants from excess moisture.",
            "Growth instability possible tomorrow.",
        ),
        (RiskLevel::High, _) => (
            "Severe weather risk detected. Monitor crop conditions closely.",
            "Weather may impact crop health in next 24 hours.",
        ),
        (RiskLevel::Medium, Crop::Rice) => (
            "Moderate humidity detected. Maintain proper water level and monitor pests.",
            "Moderate fungal risk tomorrow.",
        ),
        (RiskLevel::Medium, Crop::Wheat) => (
            "Moderate temperature rise expected. Maintain irrigation schedule.",
            "Mild crop stress possible tomorrow.",
        ),
        (RiskLevel::Medium, _) => (
            "Moderate weather changes expected. Monitor crop condition.",
            "Minor weather impact expected.",
        ),
        (RiskLevel::Low, _) => (
            "Weather conditions are stable. Continue normal farming practices.",
            "Stable crop conditions expected tomorrow.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hot_wheat_is_high_risk() {
        let assessment = assess_risk(40, 50, 30, Crop::Wheat);
        assert_eq!(assessment.risk_level, RiskLevel::High);
        assert_eq!(
            assessment.advisory_text,
            "High temperature stress possible. Increase irrigation and monitor leaf dryness."
        );
        assert_eq!(assessment.prediction_text, "Yield stress risk in next 24 hours.");
    }

    #[test]
    fn test_humid_rice_stays_low_risk() {
        // Humidity feeds the score but never the level.
        let assessment = assess_risk(30, 90, 20, Crop::Rice);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
        assert_eq!(assessment.risk_score, 45);
        assert_eq!(
            assessment.advisory_text,
            "Weather conditions are stable. Continue normal farming practices."
        );
    }

    #[test]
    fn test_maize_falls_back_to_generic_medium() {
        let assessment = assess_risk(34, 40, 55, Crop::Maize);
        assert_eq!(assessment.risk_level, RiskLevel::Medium);
        assert_eq!(
            assessment.advisory_text,
            "Moderate weather changes expected. Monitor crop condition."
        );
    }

    #[test]
    fn test_humidity_bands_stack() {
        assert_eq!(assess_risk(20, 90, 0, Crop::Other).risk_score, 45);
        assert_eq!(assess_risk(20, 75, 0, Crop::Other).risk_score, 15);
    }

    #[test]
    fn test_cloud_bands_stack() {
        assert_eq!(assess_risk(20, 0, 85, Crop::Other).risk_score, 55);
        assert_eq!(assess_risk(20, 0, 65, Crop::Other).risk_score, 20);
    }

    #[test]
    fn test_temperature_bands_are_exclusive() {
        assert_eq!(assess_risk(40, 0, 0, Crop::Other).risk_score, 35);
        assert_eq!(assess_risk(35, 0, 0, Crop::Other).risk_score, 20);
    }

    proptest! {
        /// The classifier is deterministic and total.
        #[test]
        fn prop_assessment_deterministic(
            temp in -60i32..70,
            humidity in -10i32..150,
            cloud in -10i32..150,
        ) {
            let first = assess_risk(temp, humidity, cloud, Crop::Rice);
            let second = assess_risk(temp, humidity, cloud, Crop::Rice);
            prop_assert_eq!(first, second);
        }

        /// Extreme heat always classifies High, whatever the other readings.
        #[test]
        fn prop_extreme_heat_is_high(
            temp in 39i32..70,
            humidity in 0i32..=100,
            cloud in 0i32..=100,
        ) {
            let assessment = assess_risk(temp, humidity, cloud, Crop::Wheat);
            prop_assert_eq!(assessment.risk_level, RiskLevel::High);
        }
    }
}
