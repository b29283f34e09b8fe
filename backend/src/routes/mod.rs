//! Route definitions for Krishi Smart Advisory

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Crop catalogue for the selection form
        .route("/crops", get(handlers::list_crops))
        // Advisory generation (the two-field form submission)
        .route("/advisory", get(handlers::generate_advisory))
        // Weather pass-throughs for the dashboard charts
        .nest("/weather", weather_routes())
}

/// Weather lookup routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/current", get(handlers::get_current_weather))
        .route("/forecast", get(handlers::get_weather_forecast))
}
