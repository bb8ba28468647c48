use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::{
    error::{permission::PermissionError, AppError},
    service::blacklist::BlacklistService,
};

#[cfg(test)]
mod test;

/// A condition an actor must meet before a command runs.
///
/// Passed to `PermissionGuard::require`, which checks them in the given order.
pub enum Permission {
    /// Actor is in the configured owners set.
    Owner,
    /// Actor is not on the blacklist.
    NotBlacklisted,
}

/// Evaluates command-gating predicates for an actor.
///
/// Predicates only read; they never change the owners set or the blacklist.
pub struct PermissionGuard<'a> {
    db: &'a DatabaseConnection,
    owners: &'a HashSet<u64>,
}

impl<'a> PermissionGuard<'a> {
    /// Creates a new PermissionGuard instance.
    ///
    /// # Arguments
    /// - `db` - Database connection used for blacklist lookups
    /// - `owners` - Discord IDs of the configured bot owners
    ///
    /// # Returns
    /// - `PermissionGuard` - New guard instance
    pub fn new(db: &'a DatabaseConnection, owners: &'a HashSet<u64>) -> Self {
        Self { db, owners }
    }

    /// Checks whether the actor is one of the configured owners.
    ///
    /// # Arguments
    /// - `actor_id` - Discord ID of the invoking user
    ///
    /// # Returns
    /// - `true` - Actor is in the owners set
    /// - `false` - Actor is not an owner
    pub fn is_owner(&self, actor_id: u64) -> bool {
        self.owners.contains(&actor_id)
    }

    /// Checks whether the actor is absent from the blacklist.
    ///
    /// # Returns
    /// - `Ok(true)` - Actor is not blacklisted
    /// - `Ok(false)` - Actor is blacklisted
    /// - `Err(AppError::DbErr)` - Blacklist lookup failed
    pub async fn is_not_blacklisted(&self, actor_id: u64) -> Result<bool, AppError> {
        let blacklisted = BlacklistService::new(self.db)
            .is_blacklisted(actor_id)
            .await?;

        Ok(!blacklisted)
    }

    /// Checks every permission in order, failing on the first one not met.
    ///
    /// # Returns
    /// - `Ok(())` - All permissions satisfied
    /// - `Err(AppError::PermissionErr(OwnerRequired))` - Actor is not an owner
    /// - `Err(AppError::PermissionErr(Blacklisted))` - Actor is blacklisted
    /// - `Err(AppError::DbErr)` - Blacklist lookup failed
    pub async fn require(&self, actor_id: u64, permissions: &[Permission]) -> Result<(), AppError> {
        for permission in permissions {
            match permission {
                Permission::Owner => {
                    if !self.is_owner(actor_id) {
                        return Err(PermissionError::OwnerRequired(actor_id).into());
                    }
                }
                Permission::NotBlacklisted => {
                    if !self.is_not_blacklisted(actor_id).await? {
                        return Err(PermissionError::Blacklisted(actor_id).into());
                    }
                }
            }
        }

        Ok(())
    }
}
