// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User creation and lookup.

use crate::db::{collections, DocumentStore, Query};
use crate::error::AppError;
use crate::models::{NewUserRequest, User};

/// Owns reads and writes of the `user` collection.
#[derive(Clone)]
pub struct UserService {
    db: DocumentStore,
}

impl UserService {
    pub fn new(db: DocumentStore) -> Self {
        Self { db }
    }

    /// Create a user. Usernames are not required to be unique.
    pub async fn create_user(&self, request: &NewUserRequest) -> Result<User, AppError> {
        let username = request.username()?;

        let user = User {
            id: self.db.generate_id()?,
            username: username.to_string(),
        };
        self.db.create(collections::USERS, &user.id, &user).await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User created");
        Ok(user)
    }

    /// All users in the store's natural order.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let users: Vec<User> = self.db.find(collections::USERS, &Query::new()).await?;
        tracing::debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    /// Fetch a user, failing with `NotFound` if it does not exist.
    pub async fn get_user(&self, user_id: &str) -> Result<User, AppError> {
        self.db
            .find_by_id(collections::USERS, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }
}
