use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_member_table::Member;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Report::Table)
                    .if_not_exists()
                    .col(string(Report::Id).primary_key())
                    .col(string(Report::MemberId))
                    .col(string_null(Report::GuildId))
                    .col(
                        timestamp_with_time_zone(Report::Timestamp)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_len(Report::Timezone, 16).default("CST"))
                    .col(string_len(Report::Location, 32).default("Public Matchmaking"))
                    .col(string_len_null(Report::ReporterMessage, 256))
                    .col(string_null(Report::SuspectActivisionId))
                    .col(string_null(Report::SuspectGamebattlesId))
                    .col(string_null(Report::SuspectCmgId))
                    .col(string_len(Report::SuspectPlatform, 16).default("Battle.net"))
                    .col(string_null(Report::ProofLink1))
                    .col(string_null(Report::ProofLink2))
                    .col(string_null(Report::ProofLink3))
                    .col(boolean(Report::Authorized).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_member_id")
                            .from(Report::Table, Report::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_report_member_id")
                    .table(Report::Table)
                    .col(Report::MemberId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_report_suspect_activision_id")
                    .table(Report::Table)
                    .col(Report::SuspectActivisionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Report::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Report {
    Table,
    Id,
    MemberId,
    GuildId,
    Timestamp,
    Timezone,
    Location,
    ReporterMessage,
    SuspectActivisionId,
    SuspectGamebattlesId,
    SuspectCmgId,
    SuspectPlatform,
    #[sea_orm(iden = "proof_link_1")]
    ProofLink1,
    #[sea_orm(iden = "proof_link_2")]
    ProofLink2,
    #[sea_orm(iden = "proof_link_3")]
    ProofLink3,
    Authorized,
}
