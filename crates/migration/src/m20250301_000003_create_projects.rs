//! Create `projects` table.
//! Payments and timeline are embedded JSON arrays, not child tables.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(string(Projects::Id).primary_key())
                    .col(json(Projects::ClientName))
                    .col(json_null(Projects::Address))
                    .col(string_null(Projects::Phone))
                    .col(double_null(Projects::TotalEstimate))
                    .col(string_null(Projects::StartDate))
                    .col(string_null(Projects::Deadline))
                    .col(string_null(Projects::Status))
                    .col(json_null(Projects::CurrentStage))
                    .col(string_null(Projects::ContractNumber))
                    .col(string_null(Projects::TelegramId))
                    .col(json_null(Projects::Stage))
                    .col(json_null(Projects::Forecast))
                    .col(json_null(Projects::Finance))
                    .col(json_null(Projects::Payments))
                    .col(json_null(Projects::Timeline))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Projects::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    ClientName,
    Address,
    Phone,
    TotalEstimate,
    StartDate,
    Deadline,
    Status,
    CurrentStage,
    ContractNumber,
    TelegramId,
    Stage,
    Forecast,
    Finance,
    Payments,
    Timeline,
}
