//! HTTP handlers for advisory generation

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};
use crate::models::{AdvisoryReport, Crop, CROP_CATALOGUE};
use crate::services::AdvisoryService;
use crate::AppState;

/// Query parameters for the advisory form submission
#[derive(Debug, Deserialize, Validate)]
pub struct AdvisoryQuery {
    #[validate(custom = "validate_location_field")]
    pub location: String,
    /// Unrecognized values fall back to the generic advisory set
    pub crop: Crop,
}

fn validate_location_field(location: &str) -> Result<(), ValidationError> {
    shared::validation::validate_location(location).map_err(|msg| {
        let mut err = ValidationError::new("location");
        err.message = Some(msg.into());
        err
    })
}

/// Generate an advisory report for a location and crop
pub async fn generate_advisory(
    State(state): State<AppState>,
    Query(query): Query<AdvisoryQuery>,
) -> AppResult<Json<AdvisoryReport>> {
    query.validate().map_err(|_| AppError::Validation {
        field: "location".to_string(),
        message: "Location must be between 1 and 100 characters".to_string(),
        message_hi: "स्थान 1 से 100 अक्षरों के बीच होना चाहिए".to_string(),
    })?;

    let service = AdvisoryService::new(state.weather.clone());
    let report = service.generate(query.location.trim(), query.crop).await?;
    Ok(Json(report))
}

/// List the catalogued crops the selection form offers
pub async fn list_crops() -> Json<Vec<&'static str>> {
    Json(CROP_CATALOGUE.iter().map(Crop::as_str).collect())
}
