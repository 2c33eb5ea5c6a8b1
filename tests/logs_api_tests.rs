// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise log queries through the HTTP API.

use axum::http::StatusCode;
use axum::Router;
use serde_json::json;

mod common;

/// Create a user with exercises on several dates, added out of order.
async fn seeded_user(app: &Router) -> String {
    let user_id = common::create_user(app, "alice").await;
    for (description, duration, date) in [
        ("march", 30, "2023-03-01"),
        ("january", 10, "2023-01-10"),
        ("february", 20, "2023-02-01"),
        ("late january", 15, "2023-01-31"),
    ] {
        common::add_exercise(
            app,
            &user_id,
            &format!(
                "description={}&duration={}&date={}",
                description.replace(' ', "+"),
                duration,
                date
            ),
        )
        .await;
    }
    user_id
}

fn descriptions(body: &serde_json::Value) -> Vec<String> {
    body["log"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["description"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let (app, _state) = common::create_test_app();

    let (status, user) = common::post_form(&app, "/api/users", "username=alice").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["username"], "alice");
    let id = user["id"].as_str().unwrap().to_string();

    let exercise = common::add_exercise(
        &app,
        &id,
        "description=run&duration=30&date=2023-01-15",
    )
    .await;
    assert_eq!(
        exercise,
        json!({
            "id": id,
            "username": "alice",
            "date": "Sun Jan 15 2023",
            "duration": 30,
            "description": "run",
        })
    );

    let (status, log) = common::get(&app, &format!("/api/users/{}/logs", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        log,
        json!({
            "id": id,
            "username": "alice",
            "count": 1,
            "log": [{ "description": "run", "duration": 30, "date": "Sun Jan 15 2023" }],
        })
    );

    // Response date format matches between add and log
    assert_eq!(exercise["date"], log["log"][0]["date"]);
}

#[tokio::test]
async fn test_log_sorted_ascending_by_date() {
    let (app, _state) = common::create_test_app();
    let user_id = seeded_user(&app).await;

    let (status, body) = common::get(&app, &format!("/api/users/{}/logs", user_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 4);
    assert_eq!(
        descriptions(&body),
        ["january", "late january", "february", "march"]
    );
    // Internal fields are not exposed
    let entry = body["log"][0].as_object().unwrap();
    assert_eq!(entry.len(), 3);
    assert!(!entry.contains_key("userId"));
    assert!(!entry.contains_key("id"));
}

#[tokio::test]
async fn test_log_date_range_is_inclusive() {
    let (app, _state) = common::create_test_app();
    let user_id = seeded_user(&app).await;

    let (status, body) = common::get(
        &app,
        &format!("/api/users/{}/logs?from=2023-01-31&to=2023-02-01", user_id),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(descriptions(&body), ["late january", "february"]);
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn test_log_bounds_are_independent() {
    let (app, _state) = common::create_test_app();
    let user_id = seeded_user(&app).await;

    let (_, body) = common::get(&app, &format!("/api/users/{}/logs?from=2023-02-01", user_id)).await;
    assert_eq!(descriptions(&body), ["february", "march"]);

    let (_, body) = common::get(&app, &format!("/api/users/{}/logs?to=2023-01-15", user_id)).await;
    assert_eq!(descriptions(&body), ["january"]);
}

#[tokio::test]
async fn test_log_limit_returns_earliest_entries() {
    let (app, _state) = common::create_test_app();
    let user_id = seeded_user(&app).await;

    let (_, body) = common::get(&app, &format!("/api/users/{}/logs?limit=2", user_id)).await;

    assert_eq!(body["count"], 2);
    assert_eq!(descriptions(&body), ["january", "late january"]);
}

#[tokio::test]
async fn test_log_combines_range_and_limit() {
    let (app, _state) = common::create_test_app();
    let user_id = seeded_user(&app).await;

    let (_, body) = common::get(
        &app,
        &format!("/api/users/{}/logs?from=2023-01-20&to=2023-12-31&limit=1", user_id),
    )
    .await;

    assert_eq!(descriptions(&body), ["late january"]);
}

#[tokio::test]
async fn test_log_ignores_invalid_filters() {
    let (app, _state) = common::create_test_app();
    let user_id = seeded_user(&app).await;

    let (status, body) = common::get(
        &app,
        &format!("/api/users/{}/logs?from=yesterday&to=&limit=-3", user_id),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 4);
}

#[tokio::test]
async fn test_log_repeated_keys_use_first_value() {
    let (app, _state) = common::create_test_app();
    let user_id = seeded_user(&app).await;

    let (status, body) = common::get(
        &app,
        &format!("/api/users/{}/logs?limit=1&limit=2", user_id),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(descriptions(&body), ["january"]);

    let (status, body) = common::get(
        &app,
        &format!("/api/users/{}/logs?from=2023-02-01&from=2023-01-01", user_id),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(descriptions(&body), ["february", "march"]);
}

#[tokio::test]
async fn test_log_only_includes_own_exercises() {
    let (app, _state) = common::create_test_app();
    let alice = seeded_user(&app).await;
    let bob = common::create_user(&app, "bob").await;
    common::add_exercise(&app, &bob, "description=yoga&duration=60&date=2023-01-20").await;

    let (_, body) = common::get(&app, &format!("/api/users/{}/logs", bob)).await;
    assert_eq!(body["username"], "bob");
    assert_eq!(descriptions(&body), ["yoga"]);

    let (_, body) = common::get(&app, &format!("/api/users/{}/logs", alice)).await;
    assert_eq!(body["count"], 4);
}

#[tokio::test]
async fn test_log_for_user_without_exercises() {
    let (app, _state) = common::create_test_app();
    let user_id = common::create_user(&app, "carol").await;

    let (status, body) = common::get(&app, &format!("/api/users/{}/logs", user_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert_eq!(body["log"], json!([]));
}

#[tokio::test]
async fn test_log_unknown_user_is_404() {
    let (app, _state) = common::create_test_app();

    let (status, body) = common::get(&app, "/api/users/65a1b2c3d4e5f6a7b8c9d0e1/logs").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}
