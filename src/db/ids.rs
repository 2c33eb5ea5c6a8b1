// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Document ID generation.
//!
//! IDs are 12 bytes rendered as 24 lowercase hex characters: a big-endian
//! Unix timestamp (seconds) followed by 8 random bytes, so IDs generated
//! later sort after earlier ones at one-second granularity.

use crate::error::AppError;
use ring::rand::{SecureRandom, SystemRandom};

const ID_BYTES: usize = 12;
const TIMESTAMP_BYTES: usize = 4;

/// Length of a rendered document ID.
pub const ID_LEN: usize = ID_BYTES * 2;

/// Generate a new document ID.
pub fn generate_document_id() -> Result<String, AppError> {
    let mut bytes = [0u8; ID_BYTES];

    // Truncation to 32 bits is intentional (wraps in 2106).
    let secs = chrono::Utc::now().timestamp() as u32;
    bytes[..TIMESTAMP_BYTES].copy_from_slice(&secs.to_be_bytes());

    SystemRandom::new()
        .fill(&mut bytes[TIMESTAMP_BYTES..])
        .map_err(|_| anyhow::anyhow!("System random source failed"))?;

    Ok(hex::encode(bytes))
}

/// Whether `id` has the shape of a generated document ID.
pub fn is_valid_document_id(id: &str) -> bool {
    id.len() == ID_LEN && id.bytes().all(|b| b.is_ascii_hexdigit())
}
