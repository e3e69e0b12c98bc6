mod common;

use axum::{Router, extract::Request, middleware, middleware::Next, routing::get};
use axum_test::TestServer;
use std::sync::Arc;

use common::StubPageSource;
use skycast::api::handlers::{frontend_config_handler, version_handler};
use skycast::api::middleware::cors;

fn app(state: skycast::AppState) -> Router {
    Router::new()
        .route("/config", get(frontend_config_handler))
        .route("/api/version", get(version_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_frontend_config_contract() {
    let (source, _calls) = StubPageSource::ok(common::FULL_PAGE);
    let server = TestServer::new(app(common::create_test_state(source))).unwrap();

    let response = server.get("/config").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["RECENT_SEARCH_LIMIT"], 5);
    assert_eq!(json["API_URL"], "http://localhost:5000");
}

#[tokio::test]
async fn test_version_contract() {
    let (source, _calls) = StubPageSource::ok(common::FULL_PAGE);
    let server = TestServer::new(app(common::create_test_state(source))).unwrap();

    let response = server.get("/api/version").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json.get("lastUpdated").is_some());
}

fn cors_app(state: skycast::AppState, allowed: Vec<&str>) -> Router {
    let origins = Arc::new(allowed.into_iter().map(String::from).collect::<Vec<_>>());

    app(state).layer(middleware::from_fn(move |request: Request, next: Next| {
        let origins = origins.clone();
        async move { cors::enforce(origins, request, next).await }
    }))
}

#[tokio::test]
async fn test_allowed_origin_is_echoed() {
    let (source, _calls) = StubPageSource::ok(common::FULL_PAGE);
    let state = common::create_test_state(source);
    let server = TestServer::new(cors_app(state, vec!["https://app.example.com"])).unwrap();

    let response = server
        .get("/api/version")
        .add_header("Origin", "https://app.example.com")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "https://app.example.com"
    );
}

#[tokio::test]
async fn test_disallowed_origin_gets_cors_denied_envelope() {
    let (source, _calls) = StubPageSource::ok(common::FULL_PAGE);
    let state = common::create_test_state(source);
    let server = TestServer::new(cors_app(state, vec!["https://app.example.com"])).unwrap();

    let response = server
        .get("/api/version")
        .add_header("Origin", "https://evil.example.com")
        .await;

    assert_eq!(response.status_code(), 403);
    assert_eq!(response.json::<serde_json::Value>()["code"], "CORS_DENIED");
}

#[tokio::test]
async fn test_request_without_origin_passes() {
    let (source, _calls) = StubPageSource::ok(common::FULL_PAGE);
    let state = common::create_test_state(source);
    let server = TestServer::new(cors_app(state, vec!["https://app.example.com"])).unwrap();

    server.get("/api/version").await.assert_status_ok();
}
