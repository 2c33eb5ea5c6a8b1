// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User and exercise API routes.

use crate::error::Result;
use crate::models::{LogEntry, LogQuery, NewExerciseRequest, NewUserRequest, User};
use crate::routes::extract::FormOrJson;
use crate::time_utils::format_calendar_date;
use crate::AppState;
use axum::{
    extract::{Path, RawQuery, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", post(create_user).get(list_users))
        .route("/api/users/{id}/exercises", post(add_exercise))
        .route("/api/users/{id}/logs", get(get_logs))
}

// ─── Users ───────────────────────────────────────────────────

/// Create a user from a `username` field.
async fn create_user(
    State(state): State<Arc<AppState>>,
    FormOrJson(request): FormOrJson<NewUserRequest>,
) -> Result<Json<User>> {
    let user = state.user_service.create_user(&request).await?;
    Ok(Json(user))
}

/// List every user.
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>> {
    Ok(Json(state.user_service.list_users().await?))
}

// ─── Exercises ───────────────────────────────────────────────

/// Response for a newly recorded exercise: the user plus the exercise.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ExerciseResponse {
    /// The user's ID
    pub id: String,
    pub username: String,
    /// e.g. "Mon Jan 01 2024"
    pub date: String,
    pub duration: u32,
    pub description: String,
}

async fn add_exercise(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    FormOrJson(request): FormOrJson<NewExerciseRequest>,
) -> Result<Json<ExerciseResponse>> {
    let (user, exercise) = state
        .exercise_service
        .add_exercise(&user_id, request)
        .await?;

    Ok(Json(ExerciseResponse {
        id: user.id,
        username: user.username,
        date: format_calendar_date(exercise.date),
        duration: exercise.duration,
        description: exercise.description,
    }))
}

// ─── Logs ────────────────────────────────────────────────────

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LogItem {
    pub description: String,
    pub duration: u32,
    pub date: String,
}

impl From<LogEntry> for LogItem {
    fn from(entry: LogEntry) -> Self {
        Self {
            description: entry.description,
            duration: entry.duration,
            date: format_calendar_date(entry.date),
        }
    }
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LogResponse {
    pub id: String,
    pub username: String,
    /// Number of entries in `log`
    pub count: usize,
    pub log: Vec<LogItem>,
}

/// Get a user's exercise log, optionally bounded by `from`/`to` (inclusive)
/// and capped by `limit`.
async fn get_logs(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Json<LogResponse>> {
    let log = state
        .exercise_service
        .get_log(&user_id, LogQuery::from_query_string(query.as_deref()).into())
        .await?;

    let entries: Vec<LogItem> = log.entries.into_iter().map(LogItem::from).collect();

    Ok(Json(LogResponse {
        id: log.user.id,
        username: log.user.username,
        count: entries.len(),
        log: entries,
    }))
}
