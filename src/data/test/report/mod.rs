use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{Location, Platform, Timezone};

use crate::{
    data::report::ReportRepository,
    error::{registry::RegistryError, AppError},
    model::report::CreateReportParam,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod get_by_member;

fn create_param(id: u64, member_id: u64) -> CreateReportParam {
    CreateReportParam {
        id,
        member_id,
        guild_id: None,
        timezone: Timezone::default(),
        location: Location::default(),
        reporter_message: None,
        suspect_activision_id: "Cheater#9".to_string(),
        suspect_gamebattles_id: None,
        suspect_cmg_id: None,
        suspect_platform: Platform::default(),
        proof_link_1: None,
        proof_link_2: None,
        proof_link_3: None,
        authorized: false,
    }
}
