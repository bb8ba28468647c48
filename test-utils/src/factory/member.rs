//! Member factory for creating test member entities.

use crate::factory::helpers::{next_id, passkey_digest};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default plaintext passkey used by the factory.
pub const DEFAULT_PASSKEY: &str = "1234";

/// Factory for creating test members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::member::MemberFactory;
///
/// let member = MemberFactory::new(&db)
///     .id("42")
///     .activision_id("Ghost#123")
///     .twitter_name("ghost")
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    guild_id: Option<String>,
    activision_id: String,
    twitter_name: Option<String>,
    passkey: String,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented counter value
    /// - guild_id: `None`
    /// - activision_id: `"Player#{id}"`
    /// - twitter_name: `None`
    /// - passkey: `"1234"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `MemberFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: id.to_string(),
            guild_id: None,
            activision_id: format!("Player#{}", id),
            twitter_name: None,
            passkey: DEFAULT_PASSKEY.to_string(),
        }
    }

    /// Sets the Discord user ID of the member.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the guild the member registered in.
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

    /// Sets the plaintext passkey; only its digest is stored.
    pub fn passkey(mut self, passkey: impl Into<String>) -> Self {
        self.passkey = passkey.into();
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            id: ActiveValue::Set(self.id),
            guild_id: ActiveValue::Set(self.guild_id),
            activision_id: ActiveValue::Set(self.activision_id),
            twitter_name: ActiveValue::Set(self.twitter_name),
            passkey_hash: ActiveValue::Set(passkey_digest(&self.passkey)),
            joined_on: ActiveValue::Set(Utc::now()),
            trust_rating: ActiveValue::Set(0.0),
            notoriety: ActiveValue::Set(0.0),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values.
///
/// Shorthand for `MemberFactory::new(db).build().await`.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}

/// Creates a member with a specific Discord ID.
///
/// Shorthand for `MemberFactory::new(db).id(id).build().await`.
pub async fn create_member_with_id(
    db: &DatabaseConnection,
    id: impl Into<String>,
) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).id(id).build().await
}
