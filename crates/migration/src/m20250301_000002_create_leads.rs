//! Create `leads` table.
//! Calculator and booking payloads are kept as JSON.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Leads::Table)
                    .if_not_exists()
                    .col(string(Leads::Id).primary_key())
                    .col(json_null(Leads::Name))
                    .col(string_null(Leads::Phone))
                    .col(string_null(Leads::Source))
                    .col(string(Leads::Status).default("new"))
                    .col(string_null(Leads::Date))
                    .col(string_null(Leads::Time))
                    .col(json_null(Leads::CalculatorData))
                    .col(json_null(Leads::BookingData))
                    .col(text_null(Leads::Notes))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Leads::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Leads {
    Table,
    Id,
    Name,
    Phone,
    Source,
    Status,
    Date,
    Time,
    CalculatorData,
    BookingData,
    Notes,
}
