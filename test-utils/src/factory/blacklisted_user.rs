//! Blacklist factory for creating blacklisted user entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a blacklist entry for the given Discord user ID.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord user ID to blacklist
/// - `reason` - Optional reason recorded with the entry
///
/// # Returns
/// - `Ok(entity::blacklisted_user::Model)` - Created blacklist entry
/// - `Err(DbErr)` - Database error during insert
pub async fn create_blacklisted_user(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    reason: Option<&str>,
) -> Result<entity::blacklisted_user::Model, DbErr> {
    entity::blacklisted_user::ActiveModel {
        user_id: ActiveValue::Set(user_id.into()),
        reason: ActiveValue::Set(reason.map(str::to_string)),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
