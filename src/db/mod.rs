// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Document store layer.
//!
//! `DocumentStore` is the handle the services hold. It dispatches to
//! Firestore in production and to an in-process store for local runs
//! and tests.

pub mod firestore;
pub mod ids;
pub mod memory;
pub mod query;
pub mod store;

pub use query::{FieldFilter, FilterOp, Query, SortDirection};
pub use store::DocumentStore;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "user";
    pub const EXERCISES: &str = "exercise";
}
