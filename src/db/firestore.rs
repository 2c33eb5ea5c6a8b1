// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore backend for the document store.

use crate::db::query::{FilterOp, Query, SortDirection};
use crate::error::AppError;
use serde::{de::DeserializeOwned, Serialize};

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreBackend {
    client: firestore::FirestoreDb,
}

impl FirestoreBackend {
    /// Connect to Firestore.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn connect(project_id: &str) -> Result<Self, AppError> {
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::connect_emulator(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self { client })
    }

    async fn connect_emulator(project_id: &str) -> Result<Self, AppError> {
        // The emulator never verifies tokens but the client still sends one.
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new("emulator".to_string().into()),
                expiry: chrono::Utc::now() + chrono::Duration::days(1),
            })
        });

        let client = firestore::FirestoreDb::with_options_token_source(
            firestore::FirestoreDbOptions::new(project_id.to_string()),
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to connect to Firestore emulator: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore emulator");

        Ok(Self { client })
    }

    /// Write a new document under `id`.
    pub async fn create<T>(&self, collection: &str, id: &str, doc: &T) -> Result<(), AppError>
    where
        T: Serialize + DeserializeOwned + Sync + Send,
    {
        let _: () = self
            .client
            .fluent()
            .update()
            .in_col(collection)
            .document_id(id)
            .object(doc)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    pub async fn find_by_id<T>(&self, collection: &str, id: &str) -> Result<Option<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        self.client
            .fluent()
            .select()
            .by_id_in(collection)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    pub async fn find<T>(&self, collection: &str, query: &Query) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        let select = self.client.fluent().select();
        let select = match &query.projection {
            Some(fields) => select.fields(fields.iter().copied()),
            None => select,
        };

        let mut select = select.from(collection);

        if !query.filters.is_empty() {
            select = select.filter(|q| {
                let conditions: Vec<_> = query
                    .filters
                    .iter()
                    .map(|f| {
                        let field = q.field(f.field);
                        match f.op {
                            FilterOp::Eq => field.eq(f.value.clone()),
                            FilterOp::Gte => field.greater_than_or_equal(f.value.clone()),
                            FilterOp::Lte => field.less_than_or_equal(f.value.clone()),
                        }
                    })
                    .collect();
                q.for_all(conditions)
            });
        }

        if let Some((field, direction)) = query.order_by {
            let direction = match direction {
                SortDirection::Ascending => firestore::FirestoreQueryDirection::Ascending,
                SortDirection::Descending => firestore::FirestoreQueryDirection::Descending,
            };
            select = select.order_by([(field, direction)]);
        }

        if let Some(limit) = query.limit {
            select = select.limit(limit);
        }

        select
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
