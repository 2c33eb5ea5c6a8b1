// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar date parsing and formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc, Weekday};

/// Display format used in every API response, e.g. `Mon Jan 01 2024`.
const DISPLAY_FORMAT: &str = "%a %b %d %Y";

/// Date-only input formats, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%b %d %Y",
    "%B %d, %Y",
    "%d %b %Y",
];

/// Date-time input formats without an offset (read as UTC).
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Format a calendar date the way API responses show it.
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Today's date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse a client-supplied date string into a calendar date.
///
/// Accepts ISO dates, RFC 3339 / RFC 2822 timestamps and a few common
/// human-readable spellings (including the response format itself).
/// Timestamps are reduced to their UTC calendar date. Returns `None` for
/// anything unrecognised; callers decide whether that is an error.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    // A leading weekday name is ignored, even when it disagrees with the date.
    if let Some(date) = parse_date_only(strip_weekday(raw)) {
        return Some(date);
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    if let Ok(ts) = DateTime::parse_from_rfc2822(raw) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|ts| ts.date())
}

fn parse_date_only(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

fn strip_weekday(raw: &str) -> &str {
    match raw.split_once(char::is_whitespace) {
        Some((first, rest)) if first.trim_end_matches(',').parse::<Weekday>().is_ok() => {
            rest.trim_start()
        }
        _ => raw,
    }
}
