use serenity::all::CreateEmbed;
use thiserror::Error;

use crate::bot::embed::error_embed;

/// Command gating failures raised by the permission guard.
#[derive(Error, Debug, PartialEq)]
pub enum PermissionError {
    /// Actor is not in the configured owners set.
    #[error("User {0} is not an owner of this bot")]
    OwnerRequired(u64),

    /// Actor appears in the blacklist store.
    #[error("User {0} is blacklisted")]
    Blacklisted(u64),
}

impl PermissionError {
    /// Converts the refusal into the embed shown to the user.
    ///
    /// Refusals are logged at warn level; they are expected and never escalate.
    ///
    /// # Returns
    /// - `CreateEmbed` - Red embed telling the user why the command was refused
    pub fn into_embed(self) -> CreateEmbed {
        tracing::warn!("{}", self);

        match self {
            Self::OwnerRequired(_) => error_embed("You are not the owner of the bot!"),
            Self::Blacklisted(_) => error_embed("You are blacklisted from using the bot!"),
        }
    }
}
