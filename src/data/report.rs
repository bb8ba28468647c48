//! Report data repository for database operations.
//!
//! Provides the `ReportRepository` for appending reports to the ledger and reading them
//! back. Reports are never updated or deleted through the bot.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{
    data::unique_violation,
    error::{registry::RegistryError, AppError},
    model::report::{CreateReportParam, Report},
};

/// Repository providing database operations for report records.
pub struct ReportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportRepository<'a> {
    /// Creates a new ReportRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ReportRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a report with `timestamp` set to now.
    ///
    /// # Arguments
    /// - `param` - Validated report fields, including the authorization outcome
    ///
    /// # Returns
    /// - `Ok(Report)` - The created report
    /// - `Err(AppError::RegistryErr(UniquenessViolation))` - A report with this ID exists
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn create(&self, param: CreateReportParam) -> Result<Report, AppError> {
        let id = param.id.to_string();

        let result = entity::report::ActiveModel {
            id: ActiveValue::Set(id.clone()),
            member_id: ActiveValue::Set(param.member_id.to_string()),
            guild_id: ActiveValue::Set(param.guild_id.map(|g| g.to_string())),
            timestamp: ActiveValue::Set(Utc::now()),
            timezone: ActiveValue::Set(param.timezone),
            location: ActiveValue::Set(param.location),
            reporter_message: ActiveValue::Set(param.reporter_message),
            suspect_activision_id: ActiveValue::Set(Some(param.suspect_activision_id)),
            suspect_gamebattles_id: ActiveValue::Set(param.suspect_gamebattles_id),
            suspect_cmg_id: ActiveValue::Set(param.suspect_cmg_id),
            suspect_platform: ActiveValue::Set(param.suspect_platform),
            proof_link_1: ActiveValue::Set(param.proof_link_1),
            proof_link_2: ActiveValue::Set(param.proof_link_2),
            proof_link_3: ActiveValue::Set(param.proof_link_3),
            authorized: ActiveValue::Set(param.authorized),
        }
        .insert(self.db)
        .await;

        match result {
            Ok(entity) => Report::from_entity(entity),
            Err(err) if unique_violation(&err).is_some() => {
                Err(RegistryError::UniquenessViolation {
                    entity: "report",
                    field: "id",
                    value: id,
                }
                .into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Finds a report by its ID.
    ///
    /// # Returns
    /// - `Ok(Some(Report))` - Report found
    /// - `Ok(None)` - No report with this ID
    /// - `Err(AppError)` - Database error or stored ID failed to parse
    pub async fn find_by_id(&self, id: u64) -> Result<Option<Report>, AppError> {
        entity::prelude::Report::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(Report::from_entity)
            .transpose()
    }

    /// Gets the most recent reports submitted by a member, newest first.
    ///
    /// # Arguments
    /// - `member_id` - Discord ID of the reporting member
    /// - `limit` - Maximum number of reports to return
    ///
    /// # Returns
    /// - `Ok(Vec<Report>)` - Up to `limit` reports, empty if the member has none
    /// - `Err(AppError)` - Database error or stored ID failed to parse
    pub async fn get_by_member(&self, member_id: u64, limit: u64) -> Result<Vec<Report>, AppError> {
        entity::prelude::Report::find()
            .filter(entity::report::Column::MemberId.eq(member_id.to_string()))
            .order_by_desc(entity::report::Column::Timestamp)
            .order_by_desc(entity::report::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(Report::from_entity)
            .collect()
    }
}
