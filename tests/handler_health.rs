mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use tiny_url::api::handlers::{health_handler, ping_handler};

fn test_server(state: tiny_url::AppState) -> TestServer {
    let app = Router::new()
        .route("/ping", get(ping_handler))
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_ping() {
    let server = test_server(common::create_test_state());

    let response = server.get("/ping").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["message"], "pong");
}

#[tokio::test]
async fn test_health_reports_healthy_store() {
    let server = test_server(common::create_test_state());

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert!(body["version"].is_string());
}
