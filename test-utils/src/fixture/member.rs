//! Member fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::member;

use crate::factory::helpers::passkey_digest;

/// Default Discord user ID of the fixture member.
pub const DEFAULT_ID: &str = "42";

/// Default Activision handle of the fixture member.
pub const DEFAULT_ACTIVISION_ID: &str = "Ghost#123";

/// Default plaintext passkey of the fixture member.
pub const DEFAULT_PASSKEY: &str = "1234";

/// Creates a member entity model with default values.
///
/// # Default Values
/// - id: `"42"`
/// - activision_id: `"Ghost#123"`
/// - passkey_hash: digest of `"1234"`
/// - joined_on: `2024-01-01T00:00:00Z`
///
/// # Returns
/// - `member::Model` - In-memory member entity
pub fn entity() -> member::Model {
    entity_builder().build()
}

/// Creates a member entity builder for customization.
///
/// # Returns
/// - `MemberEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> MemberEntityBuilder {
    MemberEntityBuilder::default()
}

/// Builder for creating customized member entity models.
pub struct MemberEntityBuilder {
    id: String,
    guild_id: Option<String>,
    activision_id: String,
    twitter_name: Option<String>,
    passkey: String,
}

impl Default for MemberEntityBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID.to_string(),
            guild_id: None,
            activision_id: DEFAULT_ACTIVISION_ID.to_string(),
            twitter_name: None,
            passkey: DEFAULT_PASSKEY.to_string(),
        }
    }
}

impl MemberEntityBuilder {
    /// Sets the stored Discord user ID, which is not required to be numeric.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = Some(guild_id.into());
        self
    }

    /// Sets the Activision handle.
    pub fn activision_id(mut self, activision_id: impl Into<String>) -> Self {
        self.activision_id = activision_id.into();
        self
    }

    /// Sets the Twitter handle.
    pub fn twitter_name(mut self, twitter_name: impl Into<String>) -> Self {
        self.twitter_name = Some(twitter_name.into());
        self
    }

    /// Sets the plaintext passkey whose digest is stored.
    pub fn passkey(mut self, passkey: impl Into<String>) -> Self {
        self.passkey = passkey.into();
        self
    }

    /// Builds the member entity model.
    ///
    /// # Returns
    /// - `member::Model` - In-memory member entity
    pub fn build(self) -> member::Model {
        member::Model {
            id: self.id,
            guild_id: self.guild_id,
            activision_id: self.activision_id,
            twitter_name: self.twitter_name,
            passkey_hash: passkey_digest(&self.passkey),
            joined_on: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            trust_rating: 0.0,
            notoriety: 0.0,
        }
    }
}
