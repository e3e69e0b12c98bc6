mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use std::sync::atomic::Ordering;

use common::StubPageSource;
use skycast::api::handlers::{not_found_handler, weather_handler};
use skycast::prelude::SourceError;

fn app(state: skycast::AppState) -> Router {
    Router::new()
        .route("/api/weather/{city}", get(weather_handler))
        .fallback(not_found_handler)
        .with_state(state)
}

#[tokio::test]
async fn test_weather_success_all_fields_populated() {
    let (source, _calls) = StubPageSource::ok(common::FULL_PAGE);
    let server = TestServer::new(app(common::create_test_state(source))).unwrap();

    let response = server.get("/api/weather/London").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["temperature"], "22.5 °C");
    assert_eq!(json["condition"], "Sunny");
    assert_eq!(json["minTemperature"], "18.0 °C");
    assert_eq!(json["maxTemperature"], "27.0 °C");
    assert_eq!(json["humidity"], "60%");
    assert_eq!(json["pressure"], "1015.0 hPa");
    assert_eq!(json["date"], "March 5, 2024");

    for (_, value) in json.as_object().unwrap() {
        assert_ne!(value.as_str(), Some("N/A"));
    }
}

#[tokio::test]
async fn test_invalid_city_rejected_without_network_call() {
    let (source, calls) = StubPageSource::ok(common::FULL_PAGE);
    let server = TestServer::new(app(common::create_test_state(source))).unwrap();

    let response = server.get("/api/weather/X").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "INVALID_CITY");
    assert_eq!(json["statusCode"], 400);
    assert!(json.get("timestamp").is_some());

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_numeric_city_rejected() {
    let (source, _calls) = StubPageSource::ok(common::FULL_PAGE);
    let server = TestServer::new(app(common::create_test_state(source))).unwrap();

    let response = server.get("/api/weather/London123").await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<serde_json::Value>()["code"], "INVALID_CITY");
}

#[tokio::test]
async fn test_upstream_404_maps_to_city_not_found() {
    let (source, _calls) = StubPageSource::err(SourceError::Status(404));
    let server = TestServer::new(app(common::create_test_state(source))).unwrap();

    let response = server.get("/api/weather/Atlantis").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<serde_json::Value>()["code"], "CITY_NOT_FOUND");
}

#[tokio::test]
async fn test_upstream_timeout_maps_to_504() {
    let (source, calls) = StubPageSource::err(SourceError::Timeout);
    let server = TestServer::new(app(common::create_test_state(source))).unwrap();

    let response = server.get("/api/weather/London").await;

    assert_eq!(response.status_code(), 504);
    assert_eq!(response.json::<serde_json::Value>()["code"], "TIMEOUT");

    // One primary and one fallback attempt with retries = 1.
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_upstream_transport_error_maps_to_503() {
    let (source, _calls) = StubPageSource::err(SourceError::Transport("reset".to_string()));
    let server = TestServer::new(app(common::create_test_state(source))).unwrap();

    let response = server.get("/api/weather/London").await;

    assert_eq!(response.status_code(), 503);
    assert_eq!(
        response.json::<serde_json::Value>()["code"],
        "SERVICE_UNAVAILABLE"
    );
}

#[tokio::test]
async fn test_missing_required_field_maps_to_data_not_found() {
    let (source, _calls) = StubPageSource::ok(common::NO_CONDITION_PAGE);
    let server = TestServer::new(app(common::create_test_state(source))).unwrap();

    let response = server.get("/api/weather/London").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<serde_json::Value>()["code"], "DATA_NOT_FOUND");
}

#[tokio::test]
async fn test_unknown_route_returns_route_not_found() {
    let (source, _calls) = StubPageSource::ok(common::FULL_PAGE);
    let server = TestServer::new(app(common::create_test_state(source))).unwrap();

    let response = server.get("/api/forecast/London").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "ROUTE_NOT_FOUND");
    assert_eq!(json["error"], "Route not found.");
}
