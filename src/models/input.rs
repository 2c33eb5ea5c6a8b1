// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request inputs and their validation.
//!
//! Every field is optional at the wire level so that a missing value is
//! reported with a domain message instead of an extractor rejection.

use crate::error::AppError;
use crate::time_utils::parse_calendar_date;
use chrono::NaiveDate;
use serde::Deserialize;

/// Body of `POST /api/users`.
#[derive(Debug, Default, Deserialize)]
pub struct NewUserRequest {
    pub username: Option<String>,
}

impl NewUserRequest {
    /// The requested username; absent or empty is a validation error.
    pub fn username(&self) -> Result<&str, AppError> {
        match self.username.as_deref() {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(AppError::BadRequest("username is required".to_string())),
        }
    }
}

/// A numeric field that may arrive as a JSON number or as text (forms).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    fn is_blank(&self) -> bool {
        match self {
            NumberOrText::Number(n) => *n == 0.0,
            NumberOrText::Text(s) => s.is_empty(),
        }
    }

    fn to_int(&self) -> Option<i64> {
        match self {
            NumberOrText::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            NumberOrText::Number(_) => None,
            NumberOrText::Text(s) => parse_leading_int(s),
        }
    }
}

/// Body of `POST /api/users/{id}/exercises`.
#[derive(Debug, Default, Deserialize)]
pub struct NewExerciseRequest {
    pub description: Option<String>,
    pub duration: Option<NumberOrText>,
    pub date: Option<String>,
}

/// A validated exercise, ready to be attached to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseDraft {
    pub description: String,
    pub duration: u32,
    pub date: NaiveDate,
}

impl NewExerciseRequest {
    /// Validate the request.
    ///
    /// A missing or unparseable date is replaced with `today` rather than
    /// rejected.
    pub fn into_draft(self, today: NaiveDate) -> Result<ExerciseDraft, AppError> {
        let description = self.description.filter(|d| !d.is_empty());
        let duration = self.duration.filter(|d| !d.is_blank());

        let (Some(description), Some(duration)) = (description, duration) else {
            return Err(AppError::BadRequest(
                "description and duration are required".to_string(),
            ));
        };

        let duration = duration
            .to_int()
            .filter(|&n| n > 0)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| {
                AppError::BadRequest("duration must be a positive integer".to_string())
            })?;

        let date = self
            .date
            .as_deref()
            .and_then(parse_calendar_date)
            .unwrap_or(today);

        Ok(ExerciseDraft {
            description,
            duration,
            date,
        })
    }
}

/// Query string of `GET /api/users/{id}/logs`.
///
/// Values are kept raw; anything unparseable is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

impl LogQuery {
    /// Read the raw query string. Repeated keys keep their first value and
    /// an undecodable string is treated as empty.
    pub fn from_query_string(raw: Option<&str>) -> Self {
        let pairs: Vec<(String, String)> = raw
            .and_then(|q| serde_urlencoded::from_str(q).ok())
            .unwrap_or_default();

        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "from" => &mut query.from,
                "to" => &mut query.to,
                "limit" => &mut query.limit,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// Parsed log filter. Both date bounds are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<u32>,
}

impl From<LogQuery> for LogFilter {
    fn from(query: LogQuery) -> Self {
        Self {
            from: query.from.as_deref().and_then(parse_calendar_date),
            to: query.to.as_deref().and_then(parse_calendar_date),
            limit: query
                .limit
                .as_deref()
                .and_then(parse_leading_int)
                .filter(|&n| n > 0)
                .map(|n| u32::try_from(n).unwrap_or(u32::MAX)),
        }
    }
}

/// Parse the leading integer of a string, ignoring trailing characters.
///
/// `" 30min"` gives 30, `"3.5"` gives 3, `"-2"` gives -2 and `"abc"` gives
/// `None`. Values beyond `i64` saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let digits = &rest[..digits_len];
    let value = match digits.parse::<i64>() {
        Ok(v) => v,
        Err(_) => i64::MAX,
    };
    Some(if negative { -value } else { value })
}
