// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise logging and log queries.

use crate::db::{collections, DocumentStore, Query, SortDirection};
use crate::error::AppError;
use crate::models::{Exercise, LogEntry, LogFilter, NewExerciseRequest, User};
use crate::services::UserService;
use crate::time_utils::today_utc;

/// A user's exercises matching a [`LogFilter`], oldest first.
#[derive(Debug, Clone)]
pub struct ExerciseLog {
    pub user: User,
    pub entries: Vec<LogEntry>,
}

/// Owns reads and writes of the `exercise` collection.
#[derive(Clone)]
pub struct ExerciseService {
    db: DocumentStore,
    users: UserService,
}

impl ExerciseService {
    pub fn new(db: DocumentStore, users: UserService) -> Self {
        Self { db, users }
    }

    /// Validate and record an exercise for an existing user.
    ///
    /// Input is validated before the user lookup, so a bad request for an
    /// unknown user is a 400, not a 404.
    pub async fn add_exercise(
        &self,
        user_id: &str,
        request: NewExerciseRequest,
    ) -> Result<(User, Exercise), AppError> {
        let draft = request.into_draft(today_utc()).inspect_err(|e| {
            tracing::debug!(user_id, error = %e, "Rejected exercise input");
        })?;

        let user = self.users.get_user(user_id).await?;

        let exercise = Exercise {
            id: self.db.generate_id()?,
            user_id: user.id.clone(),
            description: draft.description,
            duration: draft.duration,
            date: draft.date,
        };
        self.db
            .create(collections::EXERCISES, &exercise.id, &exercise)
            .await?;

        tracing::info!(
            user_id = %user.id,
            exercise_id = %exercise.id,
            duration = exercise.duration,
            date = %exercise.date,
            "Exercise recorded"
        );

        Ok((user, exercise))
    }

    /// Fetch a user's exercise log.
    pub async fn get_log(&self, user_id: &str, filter: LogFilter) -> Result<ExerciseLog, AppError> {
        let user = self.users.get_user(user_id).await?;

        let mut query = Query::new()
            .eq("userId", user.id.clone())
            .select(&LogEntry::FIELDS)
            .order_by("date", SortDirection::Ascending);
        if let Some(from) = filter.from {
            query = query.gte("date", from.to_string());
        }
        if let Some(to) = filter.to {
            query = query.lte("date", to.to_string());
        }
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        let entries: Vec<LogEntry> = self.db.find(collections::EXERCISES, &query).await?;

        tracing::debug!(
            user_id = %user.id,
            from = ?filter.from,
            to = ?filter.to,
            limit = ?filter.limit,
            count = entries.len(),
            "Fetched exercise log"
        );

        Ok(ExerciseLog { user, entries })
    }
}
