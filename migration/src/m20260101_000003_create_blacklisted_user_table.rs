use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlacklistedUser::Table)
                    .if_not_exists()
                    .col(string(BlacklistedUser::UserId).primary_key())
                    .col(text_null(BlacklistedUser::Reason))
                    .col(
                        timestamp_with_time_zone(BlacklistedUser::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlacklistedUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BlacklistedUser {
    Table,
    UserId,
    Reason,
    CreatedAt,
}
