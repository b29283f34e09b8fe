//! HTTP handlers for weather pass-through endpoints
//!
//! The dashboard charts read the normalized current conditions and forecast
//! series directly, independent of the advisory classification.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::external::weather::{CurrentConditions, ForecastSeries};
use crate::AppState;

/// Query parameters for weather lookups
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub location: String,
}

fn check_location(location: &str) -> AppResult<()> {
    shared::validation::validate_location(location).map_err(|msg| AppError::Validation {
        field: "location".to_string(),
        message: msg.to_string(),
        message_hi: "अमान्य स्थान".to_string(),
    })
}

/// Fetch current weather conditions for a location
pub async fn get_current_weather(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<CurrentConditions>> {
    check_location(&query.location)?;

    let conditions = state
        .weather
        .get_current_weather(query.location.trim())
        .await?;
    Ok(Json(conditions))
}

/// Fetch the short-term forecast series for a location
pub async fn get_weather_forecast(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<ForecastSeries>> {
    check_location(&query.location)?;

    let forecast = state.weather.get_forecast(query.location.trim()).await?;
    Ok(Json(forecast))
}
