//! Weather API client for fetching weather data
//!
//! Integrates with OpenWeatherMap API for current conditions and forecasts,
//! queried by city name exactly as the dashboard form supplies it.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use shared::models::ForecastPoint;

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Current conditions as reported by the provider, before snapshot rounding
#[derive(Debug, Clone, Serialize)]
pub struct CurrentConditions {
    pub location_name: String,
    pub observed_at: DateTime<Utc>,
    pub temperature_c: f64,
    pub humidity_percent: i32,
    pub cloud_percent: i32,
    pub condition: String,
    pub description: String,
    pub icon: String,
}

/// Short-term forecast series for a location
#[derive(Debug, Clone, Serialize)]
pub struct ForecastSeries {
    pub location_name: String,
    pub points: Vec<ForecastPoint>,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    weather: Vec<OwmWeather>,
    main: OwmMain,
    clouds: Option<OwmClouds>,
    dt: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct OwmClouds {
    all: i32,
}

/// OpenWeatherMap API response for forecast
#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    city: OwmCity,
    list: Vec<OwmForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OwmCity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct OwmForecastItem {
    dt: i64,
    main: OwmMain,
    weather: Vec<OwmWeather>,
    clouds: Option<OwmClouds>,
}

/// How many forecast samples the advisory flow consumes
pub const FORECAST_POINTS: usize = 5;

impl WeatherClient {
    /// Create a new WeatherClient against the production endpoint
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(
            api_key,
            "https://api.openweathermap.org/data/2.5".to_string(),
        )
    }

    /// Create a new WeatherClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch current weather conditions by city name
    pub async fn get_current_weather(&self, location: &str) -> AppResult<CurrentConditions> {
        self.ensure_configured()?;

        let url = format!("{}/weather", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Weather API request failed: {}", e);
                AppError::WeatherServiceUnavailable
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Weather API error: {} - {}", status, body);
            return Err(AppError::WeatherServiceUnavailable);
        }

        let data: OwmCurrentResponse = response.json().await.map_err(|e| {
            tracing::warn!("Failed to parse weather response: {}", e);
            AppError::WeatherServiceUnavailable
        })?;

        Ok(self.convert_current_response(data))
    }

    /// Fetch the short-term forecast by city name
    pub async fn get_forecast(&self, location: &str) -> AppResult<ForecastSeries> {
        self.ensure_configured()?;

        let url = format!("{}/forecast", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Weather API request failed: {}", e);
                AppError::WeatherServiceUnavailable
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Weather API error: {} - {}", status, body);
            return Err(AppError::WeatherServiceUnavailable);
        }

        let data: OwmForecastResponse = response.json().await.map_err(|e| {
            tracing::warn!("Failed to parse forecast response: {}", e);
            AppError::WeatherServiceUnavailable
        })?;

        Ok(self.convert_forecast_response(data))
    }

    fn ensure_configured(&self) -> AppResult<()> {
        if self.api_key.is_empty() {
            return Err(AppError::Configuration(
                "Weather API key not configured".to_string(),
            ));
        }
        Ok(())
    }

    /// Convert OpenWeatherMap current response to our format
    fn convert_current_response(&self, data: OwmCurrentResponse) -> CurrentConditions {
        let weather = data.weather.first();

        CurrentConditions {
            location_name: data.name,
            observed_at: DateTime::from_timestamp(data.dt, 0).unwrap_or_else(Utc::now),
            temperature_c: data.main.temp,
            humidity_percent: data.main.humidity,
            // Cloud cover defaults to 0 when the provider omits it
            cloud_percent: data.clouds.map(|c| c.all).unwrap_or(0),
            condition: weather.map(|w| w.main.clone()).unwrap_or_default(),
            description: weather.map(|w| w.description.clone()).unwrap_or_default(),
            icon: weather.map(|w| w.icon.clone()).unwrap_or_default(),
        }
    }

    /// Convert OpenWeatherMap forecast response to our format, keeping only
    /// the samples the trend chart consumes
    fn convert_forecast_response(&self, data: OwmForecastResponse) -> ForecastSeries {
        let points = data
            .list
            .into_iter()
            .take(FORECAST_POINTS)
            .map(|item| {
                let weather = item.weather.first();
                ForecastPoint {
                    timestamp: DateTime::from_timestamp(item.dt, 0).unwrap_or_else(Utc::now),
                    temperature_c: item.main.temp,
                    humidity_percent: item.main.humidity,
                    cloud_percent: item.clouds.map(|c| c.all).unwrap_or(0),
                    condition: weather.map(|w| w.main.clone()).unwrap_or_default(),
                }
            })
            .collect();

        ForecastSeries {
            location_name: data.city.name,
            points,
        }
    }
}
