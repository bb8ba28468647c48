//! Member registry service.
//!
//! This module provides the `MemberService` for registering members and checking their
//! passkeys. Registration validates the handles, normalizes and hashes the passkey, and
//! checks each unique key before inserting so the caller learns which key collided.

use sea_orm::DatabaseConnection;

use crate::{
    data::member::MemberRepository,
    error::{registry::RegistryError, validation::ValidationError, AppError},
    model::member::{
        CreateMemberParam, Member, RegisterMemberParam, ACTIVISION_ID_MAX_LENGTH,
        TWITTER_NAME_MAX_LENGTH,
    },
    util::passkey,
};

/// Service providing the member registry operations.
pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    /// Creates a new MemberService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MemberService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new member.
    ///
    /// Handles are trimmed; an empty Twitter handle counts as omitted. A passkey that is
    /// omitted or not exactly four characters long is replaced with `"0000"` before
    /// hashing. Only the digest is stored.
    ///
    /// # Arguments
    /// - `param` - Discord identity, handles and optional passkey
    ///
    /// # Returns
    /// - `Ok(Member)` - The registered member
    /// - `Err(AppError::ValidationErr)` - Missing or overlong handle
    /// - `Err(AppError::RegistryErr(UniquenessViolation))` - ID, Activision handle or
    ///   Twitter handle already registered
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, param: RegisterMemberParam) -> Result<Member, AppError> {
        let activision_id = param.activision_id.trim().to_string();
        if activision_id.is_empty() {
            return Err(ValidationError::MissingField("activision_id").into());
        }
        check_length("activision_id", &activision_id, ACTIVISION_ID_MAX_LENGTH)?;

        let twitter_name = param
            .twitter_name
            .map(|name| name.trim().trim_start_matches('@').to_string())
            .filter(|name| !name.is_empty());
        if let Some(name) = &twitter_name {
            check_length("twitter_name", name, TWITTER_NAME_MAX_LENGTH)?;
        }

        let repo = MemberRepository::new(self.db);

        if repo.find_by_id(param.id).await?.is_some() {
            return Err(duplicate("id", param.id.to_string()));
        }
        if repo.find_by_activision_id(&activision_id).await?.is_some() {
            return Err(duplicate("activision_id", activision_id));
        }
        if let Some(name) = &twitter_name {
            if repo.find_by_twitter_name(name).await?.is_some() {
                return Err(duplicate("twitter_name", name.clone()));
            }
        }

        let passkey_hash = passkey::hash(passkey::normalize(param.passkey.as_deref()));

        let member = repo
            .create(CreateMemberParam {
                id: param.id,
                guild_id: param.guild_id,
                activision_id,
                twitter_name,
                passkey_hash,
            })
            .await?;

        tracing::info!(
            member_id = member.id,
            activision_id = %member.activision_id,
            "Registered member"
        );

        Ok(member)
    }

    /// Checks a candidate passkey for a registered member.
    ///
    /// # Returns
    /// - `Ok(true)` - Candidate matches the stored digest
    /// - `Ok(false)` - Candidate does not match
    /// - `Err(AppError::RegistryErr(UnknownMember))` - No member with this ID
    pub async fn check_passkey(&self, member_id: u64, candidate: &str) -> Result<bool, AppError> {
        let member = self.get_member(member_id).await?;

        Ok(member.check_passkey(candidate))
    }

    /// Gets a registered member by Discord ID.
    ///
    /// # Returns
    /// - `Ok(Member)` - The member
    /// - `Err(AppError::RegistryErr(UnknownMember))` - No member with this ID
    pub async fn get_member(&self, member_id: u64) -> Result<Member, AppError> {
        MemberRepository::new(self.db)
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| RegistryError::UnknownMember(member_id).into())
    }
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }

    Ok(())
}

fn duplicate(field: &'static str, value: String) -> AppError {
    RegistryError::UniquenessViolation {
        entity: "member",
        field,
        value,
    }
    .into()
}
