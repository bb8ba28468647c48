//! Member data repository for database operations.
//!
//! This module provides the `MemberRepository` for creating and looking up registered
//! members. Lookups are available on every unique key so the registry can tell which
//! key a new registration would collide with.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::{
    data::unique_violation,
    error::{registry::RegistryError, AppError},
    model::member::{CreateMemberParam, Member},
};

/// Repository providing database operations for member records.
pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    /// Creates a new MemberRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MemberRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new member with `joined_on` set to now and zero ratings.
    ///
    /// # Arguments
    /// - `param` - Validated member fields including the passkey digest
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member
    /// - `Err(AppError::RegistryErr(UniquenessViolation))` - A unique key already exists
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn create(&self, param: CreateMemberParam) -> Result<Member, AppError> {
        let id = param.id.to_string();
        let activision_id = param.activision_id.clone();
        let twitter_name = param.twitter_name.clone();

        let result = entity::member::ActiveModel {
            id: ActiveValue::Set(id.clone()),
            guild_id: ActiveValue::Set(param.guild_id.map(|g| g.to_string())),
            activision_id: ActiveValue::Set(param.activision_id),
            twitter_name: ActiveValue::Set(param.twitter_name),
            passkey_hash: ActiveValue::Set(param.passkey_hash),
            joined_on: ActiveValue::Set(Utc::now()),
            trust_rating: ActiveValue::Set(0.0),
            notoriety: ActiveValue::Set(0.0),
        }
        .insert(self.db)
        .await;

        match result {
            Ok(entity) => Member::from_entity(entity),
            Err(err) => match unique_violation(&err) {
                Some(message) => {
                    // SQLite names the colliding column as `member.<column>`.
                    let (field, value) = if message.contains("activision_id") {
                        ("activision_id", activision_id)
                    } else if message.contains("twitter_name") {
                        ("twitter_name", twitter_name.unwrap_or_default())
                    } else {
                        ("id", id)
                    };

                    Err(RegistryError::UniquenessViolation {
                        entity: "member",
                        field,
                        value,
                    }
                    .into())
                }
                None => Err(err.into()),
            },
        }
    }

    /// Finds a member by Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member found
    /// - `Ok(None)` - No member with this ID
    /// - `Err(AppError)` - Database error or stored ID failed to parse
    pub async fn find_by_id(&self, id: u64) -> Result<Option<Member>, AppError> {
        entity::prelude::Member::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(Member::from_entity)
            .transpose()
    }

    /// Finds a member by Activision handle, matched exactly.
    pub async fn find_by_activision_id(
        &self,
        activision_id: &str,
    ) -> Result<Option<Member>, AppError> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::ActivisionId.eq(activision_id))
            .one(self.db)
            .await?
            .map(Member::from_entity)
            .transpose()
    }

    /// Finds a member by Twitter handle, matched exactly.
    pub async fn find_by_twitter_name(
        &self,
        twitter_name: &str,
    ) -> Result<Option<Member>, AppError> {
        entity::prelude::Member::find()
            .filter(entity::member::Column::TwitterName.eq(twitter_name))
            .one(self.db)
            .await?
            .map(Member::from_entity)
            .transpose()
    }
}
