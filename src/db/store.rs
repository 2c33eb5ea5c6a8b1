// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typed document store handle shared by the services.
//!
//! Provides:
//! - `create` (write a document under a freshly generated ID)
//! - `find_by_id` (point lookup)
//! - `find` (filtered, projected, sorted and limited query)

use super::firestore::FirestoreBackend;
use super::ids::{generate_document_id, is_valid_document_id};
use super::memory::MemoryStore;
use super::query::Query;
use crate::error::AppError;
use serde::{de::DeserializeOwned, Serialize};

/// Document store client. Cheap to clone; clones share one connection.
#[derive(Clone)]
pub struct DocumentStore {
    backend: Backend,
}

#[derive(Clone)]
enum Backend {
    Firestore(FirestoreBackend),
    Memory(MemoryStore),
    Offline,
}

impl DocumentStore {
    /// Connect to Firestore for the given project.
    pub async fn connect_firestore(project_id: &str) -> Result<Self, AppError> {
        Ok(Self {
            backend: Backend::Firestore(FirestoreBackend::connect(project_id).await?),
        })
    }

    /// Create an empty in-process store.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(MemoryStore::new()),
        }
    }

    /// Create a mock store for testing (offline mode).
    ///
    /// All operations return a database error.
    pub fn new_mock() -> Self {
        Self {
            backend: Backend::Offline,
        }
    }

    /// Short backend name for logs.
    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            Backend::Firestore(_) => "firestore",
            Backend::Memory(_) => "memory",
            Backend::Offline => "offline",
        }
    }

    fn offline() -> AppError {
        AppError::Database("Database not connected (offline mode)".to_string())
    }

    /// Generate an ID for a document about to be created.
    pub fn generate_id(&self) -> Result<String, AppError> {
        generate_document_id()
    }

    /// Persist a new document.
    pub async fn create<T>(&self, collection: &str, id: &str, doc: &T) -> Result<(), AppError>
    where
        T: Serialize + DeserializeOwned + Sync + Send,
    {
        match &self.backend {
            Backend::Firestore(db) => db.create(collection, id, doc).await,
            Backend::Memory(db) => db.create(collection, id, doc),
            Backend::Offline => Err(Self::offline()),
        }
    }

    /// Look up a document by ID.
    ///
    /// IDs that could never have been generated resolve to `None`.
    pub async fn find_by_id<T>(&self, collection: &str, id: &str) -> Result<Option<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        if matches!(self.backend, Backend::Offline) {
            return Err(Self::offline());
        }
        if !is_valid_document_id(id) {
            tracing::debug!(collection, id, "Malformed document id");
            return Ok(None);
        }

        match &self.backend {
            Backend::Firestore(db) => db.find_by_id(collection, id).await,
            Backend::Memory(db) => db.find_by_id(collection, id),
            Backend::Offline => Err(Self::offline()),
        }
    }

    /// Run a query against one collection.
    pub async fn find<T>(&self, collection: &str, query: &Query) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        match &self.backend {
            Backend::Firestore(db) => db.find(collection, query).await,
            Backend::Memory(db) => db.find(collection, query),
            Backend::Offline => Err(Self::offline()),
        }
    }

    /// Release the connection. Other clones keep working until dropped.
    pub fn close(self) {
        tracing::info!(backend = self.backend_name(), "Closing document store");
        drop(self);
    }
}
