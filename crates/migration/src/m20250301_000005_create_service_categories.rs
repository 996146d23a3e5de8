//! Create `service_categories` table.
//! Each category embeds its service items as a JSON array.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceCategories::Table)
                    .if_not_exists()
                    .col(string(ServiceCategories::Id).primary_key())
                    .col(json_null(ServiceCategories::Title))
                    .col(string_null(ServiceCategories::Icon))
                    .col(json_null(ServiceCategories::Services))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceCategories::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceCategories { Table, Id, Title, Icon, Services }
