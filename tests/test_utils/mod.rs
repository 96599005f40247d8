//! Test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};
use mockito::{Mock, ServerGuard};

use carbnb::api::AppState;
use carbnb::api::app;
use carbnb::core::AppConfig;

/// Session the test app falls back to when a request has no cookie.
pub const TEST_SESSION: &str = "JSESSIONID=test-session";

/// Creates a test application router that talks to `upstream_url`
/// in place of the marketplace API.
pub fn test_app(upstream_url: &str) -> Router {
    let app_config = AppConfig {
        api_url: upstream_url.to_string(),
        session_cookie: Some(String::from(TEST_SESSION)),
        page_size: 2,
        host: String::from("127.0.0.1"),
        port: String::from("2323"),
    };
    let app_state = AppState::new(app_config);
    app(Arc::new(RwLock::new(app_state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf-8")
}

/// Reads a JSON fixture from `tests/data`.
pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Missing fixture {}", path.display()))
}

/// Mocks a marketplace endpoint answering `body` as JSON.
pub async fn mock_json(server: &mut ServerGuard, method: &str, path: &str, body: &str) -> Mock {
    server
        .mock(method, path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Mocks the two reads every schedule endpoint starts with.
pub async fn mock_schedule(server: &mut ServerGuard, id: i64) -> (Mock, Mock) {
    let schedule = mock_json(
        server,
        "POST",
        &format!("/member/schedules/display/{}", id),
        &fixture("schedule.json"),
    )
    .await;
    let reservations = mock_json(
        server,
        "POST",
        &format!("/member/reservations/schedule/{}", id),
        &fixture("schedule_reservations.json"),
    )
    .await;
    (schedule, reservations)
}
