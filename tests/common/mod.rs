// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use exercise_tracker::config::Config;
use exercise_tracker::db::DocumentStore;
use exercise_tracker::routes::create_router;
use exercise_tracker::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection against the emulator.
#[allow(dead_code)]
pub async fn test_db() -> DocumentStore {
    DocumentStore::connect_firestore("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a test app over a fresh in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(
        Config::test_default(),
        DocumentStore::in_memory(),
    ));
    (create_router(state.clone()), state)
}

/// Create a test app whose store fails every operation.
#[allow(dead_code)]
pub fn create_offline_test_app() -> Router {
    let state = Arc::new(AppState::new(
        Config::test_default(),
        DocumentStore::new_mock(),
    ));
    create_router(state)
}

/// Send a request and decode the JSON response body.
#[allow(dead_code)]
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

/// POST an HTML-form body.
#[allow(dead_code)]
pub async fn post_form(app: &Router, uri: &str, form: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST a JSON body.
#[allow(dead_code)]
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

#[allow(dead_code)]
pub async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Create a user through the API and return its ID.
#[allow(dead_code)]
pub async fn create_user(app: &Router, username: &str) -> String {
    let (status, body) = post_form(app, "/api/users", &format!("username={}", username)).await;
    assert_eq!(status, StatusCode::OK, "create user failed: {body}");
    body["id"].as_str().expect("id should be a string").to_string()
}

/// Add an exercise through the API, asserting success.
#[allow(dead_code)]
pub async fn add_exercise(app: &Router, user_id: &str, form: &str) -> serde_json::Value {
    let (status, body) = post_form(app, &format!("/api/users/{}/exercises", user_id), form).await;
    assert_eq!(status, StatusCode::OK, "add exercise failed: {body}");
    body
}
