// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process document store.
//!
//! Documents are kept as JSON values per collection, in insertion order.
//! Contents are lost when the process exits.

use crate::db::query::{compare_values, Query, SortDirection};
use crate::error::AppError;
use dashmap::DashMap;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Shared in-memory collections. Clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<DashMap<String, Vec<Value>>>,
}

fn codec_error(e: serde_json::Error) -> AppError {
    AppError::Database(format!("Document encoding failed: {}", e))
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document. `id` is stored in the document's `id` field.
    pub fn create<T: Serialize>(&self, collection: &str, id: &str, doc: &T) -> Result<(), AppError> {
        let mut value = serde_json::to_value(doc).map_err(codec_error)?;
        match value.as_object_mut() {
            Some(fields) => {
                fields.insert("id".to_string(), Value::String(id.to_string()));
            }
            None => {
                return Err(AppError::Database(
                    "Documents must serialize to an object".to_string(),
                ))
            }
        }

        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(value);
        Ok(())
    }

    pub fn find_by_id<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<T>, AppError> {
        let found = self.collections.get(collection).and_then(|docs| {
            docs.iter()
                .find(|doc| doc.get("id").and_then(Value::as_str) == Some(id))
                .cloned()
        });

        found
            .map(serde_json::from_value)
            .transpose()
            .map_err(codec_error)
    }

    pub fn find<T: DeserializeOwned>(
        &self,
        collection: &str,
        query: &Query,
    ) -> Result<Vec<T>, AppError> {
        // Copy matches out so the shard lock is released before sorting.
        let mut matches: Vec<Value> = match self.collections.get(collection) {
            Some(docs) => docs.iter().filter(|d| query.matches(d)).cloned().collect(),
            None => Vec::new(),
        };

        if let Some((field, direction)) = query.order_by {
            // Stable: ties keep insertion order.
            matches.sort_by(|a, b| {
                let ord = compare_values(a.get(field), b.get(field));
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }

        if let Some(limit) = query.limit {
            matches.truncate(limit as usize);
        }

        matches
            .into_iter()
            .map(|doc| match &query.projection {
                Some(fields) => project(doc, fields),
                None => doc,
            })
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()
            .map_err(codec_error)
    }

    /// Number of documents in a collection.
    pub fn len(&self, collection: &str) -> usize {
        self.collections.get(collection).map_or(0, |docs| docs.len())
    }
}

fn project(doc: Value, fields: &[&str]) -> Value {
    match doc {
        Value::Object(mut map) => {
            let projected: Map<String, Value> = fields
                .iter()
                .filter_map(|&f| map.remove(f).map(|v| (f.to_string(), v)))
                .collect();
            Value::Object(projected)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Doc {
        id: String,
        owner: String,
        day: String,
        n: u32,
    }

    fn doc(id: &str, owner: &str, day: &str, n: u32) -> Doc {
        Doc {
            id: id.to_string(),
            owner: owner.to_string(),
            day: day.to_string(),
            n,
        }
    }

    fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        for d in [
            doc("a", "u1", "2023-03-01", 1),
            doc("b", "u1", "2023-01-01", 2),
            doc("c", "u2", "2023-02-01", 3),
            doc("d", "u1", "2023-02-01", 4),
        ] {
            store.create("things", &d.id.clone(), &d).unwrap();
        }
        store
    }

    #[test]
    fn test_find_by_id() {
        let store = seeded();
        let found: Option<Doc> = store.find_by_id("things", "c").unwrap();
        assert_eq!(found, Some(doc("c", "u2", "2023-02-01", 3)));

        let missing: Option<Doc> = store.find_by_id("things", "zzz").unwrap();
        assert!(missing.is_none());

        let no_collection: Option<Doc> = store.find_by_id("nothing", "a").unwrap();
        assert!(no_collection.is_none());
    }

    #[test]
    fn test_find_preserves_insertion_order_without_sort() {
        let store = seeded();
        let all: Vec<Doc> = store.find("things", &Query::new()).unwrap();
        let ids: Vec<_> = all.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c", "d"]);
        assert_eq!(store.len("things"), 4);
    }

    #[test]
    fn test_find_filters_sorts_and_limits() {
        let store = seeded();
        let query = Query::new()
            .eq("owner", "u1")
            .order_by("day", SortDirection::Ascending)
            .limit(2);
        let found: Vec<Doc> = store.find("things", &query).unwrap();
        let ids: Vec<_> = found.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["b", "d"]);

        let query = Query::new().order_by("n", SortDirection::Descending);
        let found: Vec<Doc> = store.find("things", &query).unwrap();
        assert_eq!(found[0].id, "d");
    }

    #[test]
    fn test_projection_drops_other_fields() {
        let store = seeded();
        let query = Query::new().eq("owner", "u2").select(&["day"]);
        let found: Vec<Value> = store.find("things", &query).unwrap();
        assert_eq!(found, vec![json!({"day": "2023-02-01"})]);
    }

    #[test]
    fn test_clones_share_data() {
        let store = MemoryStore::new();
        let other = store.clone();
        store
            .create("things", "x", &doc("x", "u1", "2023-01-01", 1))
            .unwrap();
        assert_eq!(other.len("things"), 1);
    }

    #[test]
    fn test_rejects_non_object_documents() {
        let store = MemoryStore::new();
        let err = store.create("things", "x", &42).unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
