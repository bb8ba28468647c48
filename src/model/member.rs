//! Member domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    util::{
        parse::{parse_optional_u64, parse_u64_from_string},
        passkey,
    },
};

/// Maximum length of an Activision handle.
pub const ACTIVISION_ID_MAX_LENGTH: usize = 128;

/// Maximum length of a Twitter handle.
pub const TWITTER_NAME_MAX_LENGTH: usize = 32;

/// A community member who opted into the reporting system.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// Discord ID of the member.
    pub id: u64,
    /// Guild the member registered in, if registered from a guild.
    pub guild_id: Option<u64>,
    /// Unique handle on the Activision platform.
    pub activision_id: String,
    /// Optional unique Twitter handle.
    pub twitter_name: Option<String>,
    /// SHA-256 digest of the member's passkey.
    pub passkey_hash: String,
    /// When the member registered.
    pub joined_on: DateTime<Utc>,
    pub trust_rating: f64,
    pub notoriety: f64,
}

impl Member {
    /// Converts an entity model to a member domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Member)` - The converted member domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored member or guild ID is not a `u64`
    pub fn from_entity(entity: entity::member::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: parse_u64_from_string(entity.id)?,
            guild_id: parse_optional_u64(entity.guild_id)?,
            activision_id: entity.activision_id,
            twitter_name: entity.twitter_name,
            passkey_hash: entity.passkey_hash,
            joined_on: entity.joined_on,
            trust_rating: entity.trust_rating,
            notoriety: entity.notoriety,
        })
    }

    /// Checks a candidate passkey against the stored digest.
    ///
    /// Pure comparison; the candidate is hashed as given and nothing is mutated.
    ///
    /// # Arguments
    /// - `candidate` - Passkey presented by the caller
    ///
    /// # Returns
    /// - `true` - Candidate matches the member's passkey
    /// - `false` - Candidate does not match
    pub fn check_passkey(&self, candidate: &str) -> bool {
        passkey::verify(candidate, &self.passkey_hash)
    }
}

/// Parameters for registering a new member.
#[derive(Debug, Clone)]
pub struct RegisterMemberParam {
    /// Discord ID of the member, supplied by Discord.
    pub id: u64,
    /// Guild the command was invoked in.
    pub guild_id: Option<u64>,
    pub activision_id: String,
    pub twitter_name: Option<String>,
    /// Plaintext passkey; replaced by `"0000"` unless it is exactly four characters.
    pub passkey: Option<String>,
}

/// Validated parameters for inserting a member row.
#[derive(Debug, Clone)]
pub struct CreateMemberParam {
    pub id: u64,
    pub guild_id: Option<u64>,
    pub activision_id: String,
    pub twitter_name: Option<String>,
    pub passkey_hash: String,
}
