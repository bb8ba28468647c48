//! String-backed enumerations stored on the `report` table.
//!
//! The string values are what users type and what is persisted, so they must not
//! change once data exists.

use sea_orm::entity::prelude::*;

/// Timezone the reported match was played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Timezone {
    #[sea_orm(string_value = "PST")]
    Pst,
    #[sea_orm(string_value = "CST")]
    #[default]
    Cst,
    #[sea_orm(string_value = "MST")]
    Mst,
    #[sea_orm(string_value = "EST")]
    Est,
    #[sea_orm(string_value = "Other")]
    Other,
}

/// Game mode or venue where the suspected cheating took place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum Location {
    #[sea_orm(string_value = "Public Matchmaking")]
    #[default]
    PublicMatchmaking,
    #[sea_orm(string_value = "CMGs")]
    Cmgs,
    #[sea_orm(string_value = "GBs")]
    Gbs,
    #[sea_orm(string_value = "Customs")]
    Customs,
    #[sea_orm(string_value = "CDL Moshpit")]
    CdlMoshpit,
    #[sea_orm(string_value = "Ranked Mode")]
    RankedMode,
}

/// Platform the suspect was playing on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Platform {
    #[sea_orm(string_value = "Playstation")]
    Playstation,
    #[sea_orm(string_value = "Xbox")]
    Xbox,
    #[sea_orm(string_value = "Battle.net")]
    #[default]
    BattleNet,
    #[sea_orm(string_value = "Unknown")]
    Unknown,
}
