//! Report ledger service.
//!
//! This module provides the `ReportService` for appending cheating reports and reading
//! them back. A report is always stored once its input is valid and its member exists;
//! the passkey only decides whether it is marked authorized.

use sea_orm::DatabaseConnection;

use crate::{
    data::report::ReportRepository,
    error::{registry::RegistryError, AppError},
    model::report::{Report, SubmitReportParam},
    service::member::MemberService,
};

/// Upper bound on reports returned by a single listing.
pub const MAX_LISTED_REPORTS: u64 = 25;

/// Service providing the report ledger operations.
pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    /// Creates a new ReportService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ReportService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a report on behalf of a registered member.
    ///
    /// Validates the input first, so an invalid submission writes nothing. The report
    /// is then stored with `authorized` set to the outcome of the member's passkey check.
    /// A wrong passkey does not reject the report.
    ///
    /// # Arguments
    /// - `param` - Raw submission from the command
    ///
    /// # Returns
    /// - `Ok(Report)` - The stored report
    /// - `Err(AppError::ValidationErr)` - A field failed validation
    /// - `Err(AppError::RegistryErr(UnknownMember))` - Reporting member is not registered
    /// - `Err(AppError::RegistryErr(UniquenessViolation))` - Report ID already stored
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn submit_report(&self, param: SubmitReportParam) -> Result<Report, AppError> {
        let passkey = param.passkey.clone();
        let mut create = param.validate()?;

        let member = MemberService::new(self.db)
            .get_member(create.member_id)
            .await?;

        let repo = ReportRepository::new(self.db);
        if repo.find_by_id(create.id).await?.is_some() {
            return Err(RegistryError::UniquenessViolation {
                entity: "report",
                field: "id",
                value: create.id.to_string(),
            }
            .into());
        }

        create.authorized = member.check_passkey(&passkey);

        let report = repo.create(create).await?;

        if report.authorized {
            tracing::info!(report_id = report.id, member_id = member.id, "Stored authorized report");
        } else {
            tracing::warn!(
                report_id = report.id,
                member_id = member.id,
                "Stored unauthorized report, passkey check failed"
            );
        }

        Ok(report)
    }

    /// Finds a report by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Report))` - Report found
    /// - `Ok(None)` - No report with this ID
    /// - `Err(AppError)` - Database error
    pub async fn find_report(&self, report_id: u64) -> Result<Option<Report>, AppError> {
        ReportRepository::new(self.db).find_by_id(report_id).await
    }

    /// Lists a member's most recent reports, newest first.
    ///
    /// `limit` is clamped to `1..=MAX_LISTED_REPORTS`.
    ///
    /// # Returns
    /// - `Ok(Vec<Report>)` - Up to `limit` reports
    /// - `Err(AppError::RegistryErr(UnknownMember))` - Member is not registered
    /// - `Err(AppError)` - Database error
    pub async fn list_by_member(&self, member_id: u64, limit: u64) -> Result<Vec<Report>, AppError> {
        MemberService::new(self.db).get_member(member_id).await?;

        ReportRepository::new(self.db)
            .get_by_member(member_id, limit.clamp(1, MAX_LISTED_REPORTS))
            .await
    }
}
