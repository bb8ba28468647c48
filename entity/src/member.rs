use sea_orm::entity::prelude::*;

/// A registered participant of the reporting system.
///
/// `id` is the Discord user id stored as a string; it is supplied by Discord and
/// never generated.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub guild_id: Option<String>,
    #[sea_orm(unique)]
    pub activision_id: String,
    #[sea_orm(unique)]
    pub twitter_name: Option<String>,
    pub passkey_hash: String,
    pub joined_on: DateTimeUtc,
    #[sea_orm(default_value = 0.0)]
    pub trust_rating: f64,
    #[sea_orm(default_value = 0.0)]
    pub notoriety: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::report::Entity")]
    Report,
}

impl Related<super::report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Report.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
