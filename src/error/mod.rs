//! Error types and user-facing reply mapping.
//!
//! This module provides the bot's error hierarchy and the conversion logic that turns
//! errors into the embeds sent back to Discord. `AppError` is the top-level error type
//! that wraps domain-specific errors; it is also the error type of every command, so the
//! framework's error hook receives it directly.

pub mod config;
pub mod internal;
pub mod permission;
pub mod registry;
pub mod validation;

use serenity::all::CreateEmbed;
use thiserror::Error;

use crate::{
    bot::embed::{error_embed, titled_error_embed},
    error::{
        config::ConfigError, internal::InternalError, permission::PermissionError,
        registry::RegistryError, validation::ValidationError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic conversion. Domain errors (`PermissionErr`, `RegistryErr`,
/// `ValidationErr`) are shown to the user verbatim, while infrastructure errors are
/// logged and answered with a generic message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Owner or blacklist check refused the command.
    #[error(transparent)]
    PermissionErr(#[from] PermissionError),

    /// Uniqueness violation or unknown member in the registry or ledger.
    #[error(transparent)]
    RegistryErr(#[from] RegistryError),

    /// Command input failed validation.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Unexpected state inside the bot itself.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the embed replied to the command author.
    ///
    /// Permission errors delegate to `PermissionError::into_embed()`. Registry and
    /// validation errors are user mistakes and echo their message. Everything else is
    /// logged with full details and answered with a generic message so internals do not
    /// leak into the channel.
    ///
    /// # Returns
    /// - `CreateEmbed` - Red error embed ready to send
    pub fn into_embed(self) -> CreateEmbed {
        match self {
            Self::PermissionErr(err) => err.into_embed(),
            Self::RegistryErr(err) => error_embed(err.to_string()),
            Self::ValidationErr(err) => titled_error_embed("Invalid input", err.to_string()),
            err => {
                tracing::error!("{}", err);
                titled_error_embed(
                    "Error!",
                    "Something went wrong while running this command, please try again later.",
                )
            }
        }
    }
}
