//! Passkey normalization and hashing.
//!
//! Passkeys are 4-digit numeric secrets. Only their SHA-256 digest is ever stored.
//! A passkey that is missing or is not exactly four characters long is replaced with
//! [`DEFAULT_PASSKEY`] before hashing. Only the length is checked. Candidates presented
//! at check time are hashed as given.

use sha2::{Digest, Sha256};

/// Passkey substituted when a member registers without a 4-character passkey.
pub const DEFAULT_PASSKEY: &str = "0000";

/// Required passkey length in characters.
pub const PASSKEY_LENGTH: usize = 4;

/// Returns the passkey that will actually be hashed at registration.
///
/// # Arguments
/// - `passkey` - Passkey supplied by the member, if any
///
/// # Returns
/// - `&str` - The supplied passkey if it is exactly four characters, otherwise `"0000"`
pub fn normalize(passkey: Option<&str>) -> &str {
    match passkey {
        Some(passkey) if passkey.chars().count() == PASSKEY_LENGTH => passkey,
        _ => DEFAULT_PASSKEY,
    }
}

/// Hex-encoded SHA-256 digest of a passkey.
pub fn hash(passkey: &str) -> String {
    hex::encode(Sha256::digest(passkey.as_bytes()))
}

/// Compares a candidate passkey against a stored digest.
///
/// # Arguments
/// - `candidate` - Passkey presented by the caller, hashed without normalization
/// - `stored_hash` - Digest stored at registration
///
/// # Returns
/// - `true` - Candidate digest matches
/// - `false` - Candidate digest differs
pub fn verify(candidate: &str, stored_hash: &str) -> bool {
    hash(candidate) == stored_hash
}
