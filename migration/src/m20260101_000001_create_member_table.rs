use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(string(Member::Id).primary_key())
                    .col(string_null(Member::GuildId))
                    .col(string_uniq(Member::ActivisionId))
                    .col(string_null(Member::TwitterName).unique_key())
                    .col(string(Member::PasskeyHash))
                    .col(
                        timestamp_with_time_zone(Member::JoinedOn)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(double(Member::TrustRating).default(0.0))
                    .col(double(Member::Notoriety).default(0.0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_member_guild_id")
                    .table(Member::Table)
                    .col(Member::GuildId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    GuildId,
    ActivisionId,
    TwitterName,
    PasskeyHash,
    JoinedOn,
    TrustRating,
    Notoriety,
}
