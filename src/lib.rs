// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise Tracker: log workouts against users over a small JSON API.
//!
//! This crate provides the HTTP routes, the services that own the user and
//! exercise collections, and the document store they persist to.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::DocumentStore;
use services::{ExerciseService, UserService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: DocumentStore,
    pub user_service: UserService,
    pub exercise_service: ExerciseService,
}

impl AppState {
    /// Wire the services to an opened store.
    pub fn new(config: Config, db: DocumentStore) -> Self {
        let user_service = UserService::new(db.clone());
        let exercise_service = ExerciseService::new(db.clone(), user_service.clone());
        Self {
            config,
            db,
            user_service,
            exercise_service,
        }
    }
}
