//! Report factory for creating test report entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{Location, Platform, Timezone};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reports with customizable fields.
///
/// The member referenced by `member_id` must already exist.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::report::ReportFactory;
///
/// let report = ReportFactory::new(&db, &member.id)
///     .id("999")
///     .authorized(true)
///     .build()
///     .await?;
/// ```
pub struct ReportFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    member_id: String,
    timestamp: DateTime<Utc>,
    location: Location,
    suspect_activision_id: Option<String>,
    suspect_platform: Platform,
    authorized: bool,
}

impl<'a> ReportFactory<'a> {
    /// Creates a new ReportFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented counter value
    /// - timestamp: now
    /// - location: `Public Matchmaking`
    /// - suspect_activision_id: `"Suspect#{id}"`
    /// - suspect_platform: `Battle.net`
    /// - authorized: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `member_id` - ID of the reporting member
    ///
    /// # Returns
    /// - `ReportFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, member_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            id: id.to_string(),
            member_id: member_id.to_string(),
            timestamp: Utc::now(),
            location: Location::default(),
            suspect_activision_id: Some(format!("Suspect#{}", id)),
            suspect_platform: Platform::default(),
            authorized: false,
        }
    }

    /// Sets the report ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Sets where the match took place.
    pub fn location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Sets the suspect's Activision handle.
    pub fn suspect_activision_id(mut self, suspect: impl Into<String>) -> Self {
        self.suspect_activision_id = Some(suspect.into());
        self
    }

    /// Sets the suspect's platform.
    pub fn suspect_platform(mut self, platform: Platform) -> Self {
        self.suspect_platform = platform;
        self
    }

    /// Sets whether the report passed the passkey check.
    pub fn authorized(mut self, authorized: bool) -> Self {
        self.authorized = authorized;
        self
    }

    /// Builds and inserts the report entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::report::Model)` - Created report entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::report::Model, DbErr> {
        entity::report::ActiveModel {
            id: ActiveValue::Set(self.id),
            member_id: ActiveValue::Set(self.member_id),
            guild_id: ActiveValue::Set(None),
            timestamp: ActiveValue::Set(self.timestamp),
            timezone: ActiveValue::Set(Timezone::default()),
            location: ActiveValue::Set(self.location),
            reporter_message: ActiveValue::Set(None),
            suspect_activision_id: ActiveValue::Set(self.suspect_activision_id),
            suspect_gamebattles_id: ActiveValue::Set(None),
            suspect_cmg_id: ActiveValue::Set(None),
            suspect_platform: ActiveValue::Set(self.suspect_platform),
            proof_link_1: ActiveValue::Set(None),
            proof_link_2: ActiveValue::Set(None),
            proof_link_3: ActiveValue::Set(None),
            authorized: ActiveValue::Set(self.authorized),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a report with default values for the given member.
///
/// Shorthand for `ReportFactory::new(db, member_id).build().await`.
pub async fn create_report(
    db: &DatabaseConnection,
    member_id: &str,
) -> Result<entity::report::Model, DbErr> {
    ReportFactory::new(db, member_id).build().await
}
