//! API integration tests
//!
//! Drives the advisory flow through the full router with the weather
//! provider mocked.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use krishi_advisory_backend::config::{Config, ServerConfig, WeatherConfig};
use krishi_advisory_backend::external::WeatherClient;
use krishi_advisory_backend::{create_app, AppState};

fn current_response(temp: f64, humidity: i32, cloud: i32) -> serde_json::Value {
    serde_json::json!({
        "weather": [
            { "id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d" }
        ],
        "main": { "temp": temp, "humidity": humidity },
        "clouds": { "all": cloud },
        "dt": 1723017600,
        "name": "Ghaziabad",
        "cod": 200
    })
}

fn forecast_response() -> serde_json::Value {
    let list: Vec<serde_json::Value> = (0..8)
        .map(|i| {
            serde_json::json!({
                "dt": 1723017600 + i * 10800,
                "main": { "temp": 31.5 + i as f64, "humidity": 65 + i },
                "weather": [
                    { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }
                ],
                "clouds": { "all": 20 + i }
            })
        })
        .collect();

    serde_json::json!({
        "cod": "200",
        "cnt": list.len(),
        "list": list,
        "city": { "id": 1271308, "name": "Ghaziabad", "country": "IN" }
    })
}

async fn mount_weather(mock_server: &MockServer, current: ResponseTemplate, forecast: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(current)
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(forecast)
        .mount(mock_server)
        .await;
}

fn test_state(mock_server: &MockServer) -> AppState {
    let config = Config {
        environment: "test".to_string(),
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        weather: WeatherConfig {
            api_endpoint: mock_server.uri(),
            api_key: "test-key".to_string(),
        },
    };

    AppState {
        weather: WeatherClient::with_base_url(
            config.weather.api_key.clone(),
            config.weather.api_endpoint.clone(),
        ),
        config: Arc::new(config),
    }
}

async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
    let app = create_app(state);
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_advisory_flow_high_risk_wheat() {
    let mock_server = MockServer::start().await;
    mount_weather(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(current_response(39.5, 50, 30)),
        ResponseTemplate::new(200).set_body_json(forecast_response()),
    )
    .await;

    let (status, body) = get_json(
        test_state(&mock_server),
        "/api/v1/advisory?location=Ghaziabad&crop=Wheat",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["snapshot"]["temperature_c"], 40);
    assert_eq!(body["snapshot"]["crop"], "Wheat");
    assert_eq!(body["assessment"]["risk_level"], "High");
    assert_eq!(
        body["assessment"]["advisory_text"],
        "High temperature stress possible. Increase irrigation and monitor leaf dryness."
    );
    assert_eq!(
        body["assessment"]["prediction_text"],
        "Yield stress risk in next 24 hours."
    );
    assert_eq!(body["forecast"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_advisory_unknown_crop_gets_generic_messages() {
    let mock_server = MockServer::start().await;
    mount_weather(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(current_response(25.0, 60, 10)),
        ResponseTemplate::new(200).set_body_json(forecast_response()),
    )
    .await;

    let (status, body) = get_json(
        test_state(&mock_server),
        "/api/v1/advisory?location=Ghaziabad&crop=Cassava",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["snapshot"]["crop"], "Other");
    assert_eq!(body["assessment"]["risk_level"], "Low");
    assert_eq!(
        body["assessment"]["advisory_text"],
        "Weather conditions are stable. Continue normal farming practices."
    );
}

#[tokio::test]
async fn test_advisory_rejects_blank_location() {
    let mock_server = MockServer::start().await;

    let (status, body) = get_json(
        test_state(&mock_server),
        "/api/v1/advisory?location=%20&crop=Wheat",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "location");
}

#[tokio::test]
async fn test_advisory_provider_failure_is_generic() {
    let mock_server = MockServer::start().await;
    mount_weather(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let (status, body) = get_json(
        test_state(&mock_server),
        "/api/v1/advisory?location=Ghaziabad&crop=Rice",
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "WEATHER_SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn test_crop_catalogue() {
    let mock_server = MockServer::start().await;

    let (status, body) = get_json(test_state(&mock_server), "/api/v1/crops").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!(["Wheat", "Rice", "Maize", "Sugarcane", "Potato"])
    );
}

#[tokio::test]
async fn test_weather_passthrough_endpoints() {
    let mock_server = MockServer::start().await;
    mount_weather(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(current_response(28.3, 72, 45)),
        ResponseTemplate::new(200).set_body_json(forecast_response()),
    )
    .await;

    let (status, body) = get_json(
        test_state(&mock_server),
        "/api/v1/weather/current?location=Ghaziabad",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["humidity_percent"], 72);
    assert_eq!(body["cloud_percent"], 45);

    let (status, body) = get_json(
        test_state(&mock_server),
        "/api/v1/weather/forecast?location=Ghaziabad",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location_name"], "Ghaziabad");
    assert_eq!(body["points"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_health_endpoint() {
    let mock_server = MockServer::start().await;

    let (status, body) = get_json(test_state(&mock_server), "/api/v1/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
