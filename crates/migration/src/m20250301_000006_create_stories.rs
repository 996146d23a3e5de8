//! Create `stories` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stories::Table)
                    .if_not_exists()
                    .col(string(Stories::Id).primary_key())
                    .col(string_null(Stories::Category))
                    .col(string_null(Stories::ImageUrl))
                    .col(json_null(Stories::Title))
                    .col(string_null(Stories::VideoUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Stories::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Stories { Table, Id, Category, ImageUrl, Title, VideoUrl }
