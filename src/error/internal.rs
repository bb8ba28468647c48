use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a stored Discord ID back into `u64`.
    ///
    /// IDs are persisted as strings, so this only occurs if a row was written
    /// outside of the repositories. Answered with a generic error message.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Failure to convert a stored timestamp to a Discord embed timestamp.
    #[error("Failed to convert Unix timestamp {timestamp} to Discord timestamp: {reason}")]
    InvalidDiscordTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
        /// The reason for conversion failure
        reason: String,
    },

    /// An external API answered with a body that could not be parsed.
    #[error("Unexpected response from {source_name}: {reason}")]
    UnexpectedResponse {
        /// Human-readable name of the API
        source_name: &'static str,
        /// Parse failure description
        reason: String,
    },
}
