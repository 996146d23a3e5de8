//! Create `calculator_settings` table.
//!
//! Usually a single row (id 1) holding the whole price table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CalculatorSettings::Table)
                    .if_not_exists()
                    .col(big_integer(CalculatorSettings::Id).auto_increment().primary_key())
                    .col(json_null(CalculatorSettings::Prices))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CalculatorSettings::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CalculatorSettings { Table, Id, Prices }
