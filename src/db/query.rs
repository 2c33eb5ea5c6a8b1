// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Backend-neutral query description.

use serde_json::Value;
use std::cmp::Ordering;

/// Comparison applied by a [`FieldFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Gte,
    Lte,
}

/// Condition on a single string-valued field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: &'static str,
    pub op: FilterOp,
    pub value: String,
}

impl FieldFilter {
    /// Evaluate the filter against a JSON document. Missing or non-string
    /// fields never match.
    pub fn matches(&self, doc: &Value) -> bool {
        let Some(actual) = doc.get(self.field).and_then(Value::as_str) else {
            return false;
        };
        let expected = self.value.as_str();
        match self.op {
            FilterOp::Eq => actual == expected,
            FilterOp::Gte => actual >= expected,
            FilterOp::Lte => actual <= expected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A filtered, projected, sorted and limited read of one collection.
///
/// All filters must match (logical AND).
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub filters: Vec<FieldFilter>,
    pub projection: Option<Vec<&'static str>>,
    pub order_by: Option<(&'static str, SortDirection)>,
    pub limit: Option<u32>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_filter(mut self, field: &'static str, op: FilterOp, value: impl Into<String>) -> Self {
        self.filters.push(FieldFilter {
            field,
            op,
            value: value.into(),
        });
        self
    }

    pub fn eq(self, field: &'static str, value: impl Into<String>) -> Self {
        self.with_filter(field, FilterOp::Eq, value)
    }

    pub fn gte(self, field: &'static str, value: impl Into<String>) -> Self {
        self.with_filter(field, FilterOp::Gte, value)
    }

    pub fn lte(self, field: &'static str, value: impl Into<String>) -> Self {
        self.with_filter(field, FilterOp::Lte, value)
    }

    /// Return only the named fields.
    pub fn select(mut self, fields: &[&'static str]) -> Self {
        self.projection = Some(fields.to_vec());
        self
    }

    pub fn order_by(mut self, field: &'static str, direction: SortDirection) -> Self {
        self.order_by = Some((field, direction));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether a document satisfies every filter.
    pub fn matches(&self, doc: &Value) -> bool {
        self.filters.iter().all(|f| f.matches(doc))
    }
}

/// Total order over JSON field values used for in-memory sorting.
///
/// Missing values sort first, then numbers, then strings.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(Value::Number(a)), Some(Value::Number(b))) => {
            let a = a.as_f64().unwrap_or(f64::NAN);
            let b = b.as_f64().unwrap_or(f64::NAN);
            a.total_cmp(&b)
        }
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => rank(a).cmp(&rank(b)),
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}
