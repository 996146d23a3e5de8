//! Create `catalog` table.
//!
//! Shop items; localized title/description and specs are JSON blobs.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Catalog::Table)
                    .if_not_exists()
                    .col(string(Catalog::Id).primary_key())
                    .col(string_null(Catalog::Category))
                    .col(json_null(Catalog::Title))
                    .col(json_null(Catalog::Description))
                    .col(double_null(Catalog::Price))
                    .col(string_null(Catalog::Image))
                    .col(json_null(Catalog::Images))
                    .col(json_null(Catalog::Specs))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Catalog::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Catalog { Table, Id, Category, Title, Description, Price, Image, Images, Specs }
