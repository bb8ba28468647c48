use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{Location, Platform, Timezone};

/// A cheating report submitted by a member.
///
/// `id` is the id of the Discord message or interaction that created the report.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "report")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub member_id: String,
    pub guild_id: Option<String>,
    pub timestamp: DateTimeUtc,
    pub timezone: Timezone,
    pub location: Location,
    pub reporter_message: Option<String>,
    pub suspect_activision_id: Option<String>,
    pub suspect_gamebattles_id: Option<String>,
    pub suspect_cmg_id: Option<String>,
    pub suspect_platform: Platform,
    pub proof_link_1: Option<String>,
    pub proof_link_2: Option<String>,
    pub proof_link_3: Option<String>,
    pub authorized: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Member,
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
