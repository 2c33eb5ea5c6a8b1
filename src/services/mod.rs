// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod exercises;
pub mod users;

pub use exercises::{ExerciseLog, ExerciseService};
pub use users::UserService;
