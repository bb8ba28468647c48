//! Database repository layer for members, reports and the blacklist.
//!
//! Repositories use SeaORM entity models internally and return domain models, converting
//! at the boundary. Discord IDs are stored as strings and parsed back to `u64` on the way
//! out. Unique-key collisions that slip past a service's pre-check are reported as
//! `RegistryError::UniquenessViolation` rather than raw database errors.

pub mod blacklist;
pub mod member;
pub mod report;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

/// Returns the constraint message if the error is a unique or primary key collision.
fn unique_violation(err: &DbErr) -> Option<String> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => Some(message),
        _ => None,
    }
}
