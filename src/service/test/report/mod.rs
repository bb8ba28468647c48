use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{Location, Platform, Timezone};
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::{
    error::{registry::RegistryError, validation::ValidationError, AppError},
    model::{member::RegisterMemberParam, report::SubmitReportParam},
    service::{member::MemberService, report::ReportService},
};
use test_utils::{builder::TestBuilder, factory};

mod find_report;
mod list_by_member;

/// Registers member 42 ("Ghost#123") with passkey 1234.
async fn register_ghost(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    MemberService::new(db)
        .register(RegisterMemberParam {
            id: 42,
            guild_id: None,
            activision_id: "Ghost#123".to_string(),
            twitter_name: None,
            passkey: Some("1234".to_string()),
        })
        .await?;

    Ok(())
}

/// Report 999 from member 42 against "Cheater#9" in Ranked Mode on Xbox.
fn ranked_report(passkey: &str) -> SubmitReportParam {
    SubmitReportParam {
        report_id: 999,
        member_id: 42,
        passkey: passkey.to_string(),
        timezone: Some("CST".to_string()),
        location: Some("Ranked Mode".to_string()),
        suspect_activision_id: "Cheater#9".to_string(),
        suspect_platform: Some("Xbox".to_string()),
        ..Default::default()
    }
}

async fn report_count(db: &sea_orm::DatabaseConnection) -> Result<u64, AppError> {
    Ok(entity::prelude::Report::find().count(db).await?)
}
