//! Blacklist data repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};

use crate::{error::AppError, model::blacklist::BlacklistEntry};

pub struct BlacklistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlacklistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a Discord user is on the blacklist.
    pub async fn is_blacklisted(&self, user_id: u64) -> Result<bool, AppError> {
        let count = entity::prelude::BlacklistedUser::find_by_id(user_id.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds a user to the blacklist, replacing the reason if already present.
    ///
    /// The original `created_at` is kept when the user is already blacklisted.
    ///
    /// # Returns
    /// - `Ok(BlacklistEntry)` - The stored entry
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn add(&self, user_id: u64, reason: Option<String>) -> Result<BlacklistEntry, AppError> {
        let entity = entity::prelude::BlacklistedUser::insert(entity::blacklisted_user::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            reason: ActiveValue::Set(reason),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::blacklisted_user::Column::UserId)
                .update_column(entity::blacklisted_user::Column::Reason)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        BlacklistEntry::from_entity(entity)
    }

    /// Removes a user from the blacklist.
    ///
    /// # Returns
    /// - `Ok(true)` - The user was blacklisted and has been removed
    /// - `Ok(false)` - The user was not on the blacklist
    pub async fn remove(&self, user_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::BlacklistedUser::delete_by_id(user_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets every blacklist entry, oldest first.
    pub async fn get_all(&self) -> Result<Vec<BlacklistEntry>, AppError> {
        entity::prelude::BlacklistedUser::find()
            .order_by_asc(entity::blacklisted_user::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(BlacklistEntry::from_entity)
            .collect()
    }
}
