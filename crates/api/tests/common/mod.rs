#![allow(dead_code)] // not every test file uses every helper

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use parkhaus_api::config::ServerConfig;
use parkhaus_api::router::build_app_router;
use parkhaus_api::state::AppState;
use parkhaus_dispatch::Dispatcher;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        dispatch_timeout_secs: 5,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the construction in `main.rs` (including the spawned
/// dispatcher) so integration tests exercise the same stack production
/// uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let timeout = Duration::from_secs(test_config().dispatch_timeout_secs);
    build_test_app_with_dispatch_timeout(pool, timeout)
}

/// Same as [`build_test_app`] but with a caller-chosen completion wait,
/// for tests that stall the store on purpose.
pub fn build_test_app_with_dispatch_timeout(pool: PgPool, reply_timeout: Duration) -> Router {
    let config = test_config();
    let dispatcher = Dispatcher::spawn(pool.clone(), reply_timeout);

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        dispatcher,
    };

    build_app_router(state, &config)
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body to the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request to the app.
pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!(
            "response body is not JSON ({e}): {}",
            String::from_utf8_lossy(&bytes)
        )
    })
}

/// Create a lot through the API and return its id.
pub async fn create_lot(app: &Router, name: &str, capacity: i64) -> i64 {
    let response = post_json(
        app.clone(),
        "/parkingLot",
        serde_json::json!({ "name": name, "capacity": capacity }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Issue a ticket through the API and return its id (canonical UUID string).
pub async fn issue_ticket(app: &Router, lot_id: i64, plate: &str) -> String {
    let response = post_json(
        app.clone(),
        "/ticket",
        serde_json::json!({ "car_licence_plate": plate, "parking_lot_id": lot_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_str().unwrap().to_string()
}
