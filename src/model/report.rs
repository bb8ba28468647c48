//! Report domain models, parameters and choice parsing.
//!
//! Reports arrive from Discord commands as raw strings. `SubmitReportParam` carries that
//! raw input; `SubmitReportParam::validate` turns it into a `CreateReportParam` with typed
//! enumerations and checked free-text fields, or a `ValidationError` naming the first bad
//! field. Nothing is written until validation succeeds.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{Location, Platform, Timezone};
use sea_orm::{ActiveEnum, Iterable};
use url::Url;

use crate::{
    error::{validation::ValidationError, AppError},
    util::parse::{parse_optional_u64, parse_u64_from_string},
};

/// Maximum length of the reporter's free-text note.
pub const REPORTER_MESSAGE_MAX_LENGTH: usize = 256;

/// Maximum length of a suspect's Activision, GameBattles or CMG handle.
pub const SUSPECT_ID_MAX_LENGTH: usize = 32;

/// Maximum length of a single proof link.
pub const PROOF_LINK_MAX_LENGTH: usize = 128;

/// A cheating report linked to the member who submitted it.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// ID of the Discord message or interaction that created the report.
    pub id: u64,
    /// Discord ID of the reporting member.
    pub member_id: u64,
    pub guild_id: Option<u64>,
    pub timestamp: DateTime<Utc>,
    pub timezone: Timezone,
    pub location: Location,
    pub reporter_message: Option<String>,
    pub suspect_activision_id: Option<String>,
    pub suspect_gamebattles_id: Option<String>,
    pub suspect_cmg_id: Option<String>,
    pub suspect_platform: Platform,
    pub proof_links: Vec<String>,
    /// Whether the submitter proved knowledge of the member's passkey.
    pub authorized: bool,
}

impl Report {
    /// Converts an entity model to a report domain model at the repository boundary.
    ///
    /// Empty proof link slots are dropped, preserving the order of the remaining links.
    ///
    /// # Returns
    /// - `Ok(Report)` - The converted report domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored ID is not a `u64`
    pub fn from_entity(entity: entity::report::Model) -> Result<Self, AppError> {
        let proof_links = [entity.proof_link_1, entity.proof_link_2, entity.proof_link_3]
            .into_iter()
            .flatten()
            .collect();

        Ok(Self {
            id: parse_u64_from_string(entity.id)?,
            member_id: parse_u64_from_string(entity.member_id)?,
            guild_id: parse_optional_u64(entity.guild_id)?,
            timestamp: entity.timestamp,
            timezone: entity.timezone,
            location: entity.location,
            reporter_message: entity.reporter_message,
            suspect_activision_id: entity.suspect_activision_id,
            suspect_gamebattles_id: entity.suspect_gamebattles_id,
            suspect_cmg_id: entity.suspect_cmg_id,
            suspect_platform: entity.suspect_platform,
            proof_links,
            authorized: entity.authorized,
        })
    }
}

/// Raw report submission as received from a command.
///
/// Enumerated fields are strings so that invalid values surface as a
/// `ValidationError` instead of being silently defaulted. `None` means the field was
/// omitted, in which case the column default applies.
#[derive(Debug, Clone, Default)]
pub struct SubmitReportParam {
    /// ID of the originating message or interaction.
    pub report_id: u64,
    /// Discord ID of the reporting member.
    pub member_id: u64,
    /// Guild the command was invoked in.
    pub guild_id: Option<u64>,
    /// Passkey presented by the submitter.
    pub passkey: String,
    pub timezone: Option<String>,
    pub location: Option<String>,
    pub suspect_activision_id: String,
    pub suspect_platform: Option<String>,
    pub reporter_message: Option<String>,
    pub proof_link_1: Option<String>,
    pub proof_link_2: Option<String>,
    pub proof_link_3: Option<String>,
    pub suspect_gamebattles_id: Option<String>,
    pub suspect_cmg_id: Option<String>,
}

/// Validated report fields ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateReportParam {
    pub id: u64,
    pub member_id: u64,
    pub guild_id: Option<u64>,
    pub timezone: Timezone,
    pub location: Location,
    pub reporter_message: Option<String>,
    pub suspect_activision_id: String,
    pub suspect_gamebattles_id: Option<String>,
    pub suspect_cmg_id: Option<String>,
    pub suspect_platform: Platform,
    pub proof_link_1: Option<String>,
    pub proof_link_2: Option<String>,
    pub proof_link_3: Option<String>,
    pub authorized: bool,
}

impl SubmitReportParam {
    /// Validates the raw submission.
    ///
    /// The passkey is not checked here; `authorized` is filled in by the ledger once the
    /// reporting member has been loaded.
    ///
    /// # Returns
    /// - `Ok(CreateReportParam)` - All fields valid, with `authorized` set to `false`
    /// - `Err(ValidationError)` - First field that failed validation
    pub fn validate(self) -> Result<CreateReportParam, ValidationError> {
        let suspect_activision_id = self.suspect_activision_id.trim().to_string();
        if suspect_activision_id.is_empty() {
            return Err(ValidationError::MissingField("suspect_activision_id"));
        }
        check_length(
            "suspect_activision_id",
            &suspect_activision_id,
            SUSPECT_ID_MAX_LENGTH,
        )?;

        let reporter_message = bounded(
            "reporter_message",
            self.reporter_message,
            REPORTER_MESSAGE_MAX_LENGTH,
        )?;
        let suspect_gamebattles_id = bounded(
            "suspect_gamebattles_id",
            self.suspect_gamebattles_id,
            SUSPECT_ID_MAX_LENGTH,
        )?;
        let suspect_cmg_id = bounded("suspect_cmg_id", self.suspect_cmg_id, SUSPECT_ID_MAX_LENGTH)?;

        Ok(CreateReportParam {
            id: self.report_id,
            member_id: self.member_id,
            guild_id: self.guild_id,
            timezone: parse_choice("timezone", self.timezone.as_deref())?,
            location: parse_choice("location", self.location.as_deref())?,
            reporter_message,
            suspect_activision_id,
            suspect_gamebattles_id,
            suspect_cmg_id,
            suspect_platform: parse_choice("suspect_platform", self.suspect_platform.as_deref())?,
            proof_link_1: parse_proof_link("proof_link_1", self.proof_link_1)?,
            proof_link_2: parse_proof_link("proof_link_2", self.proof_link_2)?,
            proof_link_3: parse_proof_link("proof_link_3", self.proof_link_3)?,
            authorized: false,
        })
    }
}

/// Parses one of a fixed set of string choices.
///
/// Matching ignores ASCII case and surrounding whitespace. An omitted value yields the
/// enumeration's default; a present but unknown value is rejected.
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `raw` - Raw value, or `None` if omitted
///
/// # Returns
/// - `Ok(E)` - Matching choice, or the default when omitted
/// - `Err(ValidationError::InvalidChoice)` - Value is not one of the choices
pub fn parse_choice<E>(field: &'static str, raw: Option<&str>) -> Result<E, ValidationError>
where
    E: ActiveEnum<Value = String> + Iterable + Default,
{
    let Some(raw) = raw else {
        return Ok(E::default());
    };

    let wanted = raw.trim();
    E::iter()
        .find(|choice| choice.to_value().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ValidationError::InvalidChoice {
            field,
            value: raw.to_string(),
            allowed: choice_values::<E>().join(", "),
        })
}

/// Lists the accepted string values of a choice enumeration in declaration order.
pub fn choice_values<E>() -> Vec<String>
where
    E: ActiveEnum<Value = String> + Iterable,
{
    E::iter().map(|choice| choice.to_value()).collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }

    Ok(())
}

/// Trims an optional free-text value, dropping it when empty and rejecting it over `max`.
fn bounded(
    field: &'static str,
    value: Option<String>,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    let value = non_empty(value);
    if let Some(value) = &value {
        check_length(field, value, max)?;
    }

    Ok(value)
}

fn parse_proof_link(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, ValidationError> {
    let Some(value) = bounded(field, value, PROOF_LINK_MAX_LENGTH)? else {
        return Ok(None);
    };

    match Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Some(value)),
        _ => Err(ValidationError::InvalidUrl { field, value }),
    }
}
