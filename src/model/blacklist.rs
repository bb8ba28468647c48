//! Blacklist domain model.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Maximum length of a blacklist reason.
pub const BLACKLIST_REASON_MAX_LENGTH: usize = 256;

/// A Discord user barred from using the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct BlacklistEntry {
    pub user_id: u64,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl BlacklistEntry {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(BlacklistEntry)` - Converted entry
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored user ID is not a `u64`
    pub fn from_entity(entity: entity::blacklisted_user::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: parse_u64_from_string(entity.user_id)?,
            reason: entity.reason,
            created_at: entity.created_at,
        })
    }
}
