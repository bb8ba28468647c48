//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation, passkey digests and convenience methods for creating
//! entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};
use sha2::{Digest, Sha256};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Hex-encoded SHA-256 digest of a passkey, matching what the registry stores.
///
/// # Arguments
/// - `passkey` - Plaintext passkey
///
/// # Returns
/// - `String` - Lowercase hex digest
pub fn passkey_digest(passkey: &str) -> String {
    hex::encode(Sha256::digest(passkey.as_bytes()))
}

/// Creates a member and one report submitted by that member.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((member, report))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_report_with_member(
    db: &DatabaseConnection,
) -> Result<(entity::member::Model, entity::report::Model), DbErr> {
    let member = crate::factory::member::create_member(db).await?;
    let report = crate::factory::report::create_report(db, &member.id).await?;

    Ok((member, report))
}
