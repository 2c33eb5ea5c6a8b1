// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Exercise document stored in the `exercise` collection.
///
/// `date` serializes as `YYYY-MM-DD`, so string comparison in the store
/// matches calendar order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Store-generated document ID
    pub id: String,
    /// Owning user's ID (checked only when the exercise is written)
    #[serde(rename = "userId")]
    pub user_id: String,
    pub description: String,
    /// Minutes, always positive
    pub duration: u32,
    pub date: NaiveDate,
}

/// Projection of an exercise returned by log queries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: u32,
    pub date: NaiveDate,
}

impl LogEntry {
    /// Fields kept by the log projection.
    pub const FIELDS: [&'static str; 3] = ["description", "duration", "date"];
}

