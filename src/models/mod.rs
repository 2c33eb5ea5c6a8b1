// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod exercise;
pub mod input;
pub mod user;

pub use exercise::{Exercise, LogEntry};
pub use input::{ExerciseDraft, LogFilter, LogQuery, NewExerciseRequest, NewUserRequest};
pub use user::User;
