//! Blacklist management service used by the owner commands and the permission guard.

use sea_orm::DatabaseConnection;

use crate::{
    data::blacklist::BlacklistRepository,
    error::{validation::ValidationError, AppError},
    model::blacklist::{BlacklistEntry, BLACKLIST_REASON_MAX_LENGTH},
};

pub struct BlacklistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlacklistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn is_blacklisted(&self, user_id: u64) -> Result<bool, AppError> {
        BlacklistRepository::new(self.db).is_blacklisted(user_id).await
    }

    /// Blacklists a user, replacing the reason if they are already listed.
    ///
    /// # Returns
    /// - `Ok((BlacklistEntry, true))` - User newly blacklisted
    /// - `Ok((BlacklistEntry, false))` - User was already blacklisted; reason updated
    /// - `Err(AppError::ValidationErr(TooLong))` - Reason longer than `BLACKLIST_REASON_MAX_LENGTH`
    pub async fn add(
        &self,
        user_id: u64,
        reason: Option<String>,
    ) -> Result<(BlacklistEntry, bool), AppError> {
        let reason = reason.map(|r| r.trim().to_string()).filter(|r| !r.is_empty());
        if let Some(reason) = &reason {
            let actual = reason.chars().count();
            if actual > BLACKLIST_REASON_MAX_LENGTH {
                return Err(ValidationError::TooLong {
                    field: "reason",
                    max: BLACKLIST_REASON_MAX_LENGTH,
                    actual,
                }
                .into());
            }
        }

        let repo = BlacklistRepository::new(self.db);
        let existed = repo.is_blacklisted(user_id).await?;

        let entry = repo.add(user_id, reason).await?;

        tracing::info!(user_id, "Blacklisted user");

        Ok((entry, !existed))
    }

    /// Removes a user from the blacklist.
    ///
    /// # Returns
    /// - `Ok(true)` - User removed
    /// - `Ok(false)` - User was not blacklisted
    pub async fn remove(&self, user_id: u64) -> Result<bool, AppError> {
        let removed = BlacklistRepository::new(self.db).remove(user_id).await?;

        if removed {
            tracing::info!(user_id, "Removed user from blacklist");
        }

        Ok(removed)
    }

    pub async fn get_all(&self) -> Result<Vec<BlacklistEntry>, AppError> {
        BlacklistRepository::new(self.db).get_all().await
    }
}
