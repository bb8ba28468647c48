//! Command checks backed by the permission guard.
//!
//! A refused check returns the `PermissionError` so the error hook can tell the user
//! why, rather than failing silently.

use crate::{
    bot::Context,
    error::AppError,
    guard::{Permission, PermissionGuard},
};

/// Refuses commands from blacklisted users.
pub async fn not_blacklisted(ctx: Context<'_>) -> Result<bool, AppError> {
    require(ctx, &[Permission::NotBlacklisted]).await
}

/// Refuses commands from anyone outside the configured owners.
pub async fn is_owner(ctx: Context<'_>) -> Result<bool, AppError> {
    require(ctx, &[Permission::Owner]).await
}

async fn require(ctx: Context<'_>, permissions: &[Permission]) -> Result<bool, AppError> {
    let data = ctx.data();

    PermissionGuard::new(&data.db, &data.owners)
        .require(ctx.author().id.get(), permissions)
        .await?;

    Ok(true)
}
