//! Create `portfolio` table.
//!
//! Ids are store-generated unless the caller supplies one; the admin screen
//! sends millisecond timestamps, so the key is a 64-bit integer.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Portfolio::Table)
                    .if_not_exists()
                    .col(big_integer(Portfolio::Id).auto_increment().primary_key())
                    .col(string_null(Portfolio::Type))
                    .col(json_null(Portfolio::Title))
                    .col(string_null(Portfolio::ImgBefore))
                    .col(string_null(Portfolio::ImgAfter))
                    .col(string_null(Portfolio::Area))
                    .col(string_null(Portfolio::Term))
                    .col(string_null(Portfolio::Cost))
                    .col(string_null(Portfolio::Location))
                    .col(boolean(Portfolio::IsNewBuilding).default(false))
                    .col(json_null(Portfolio::Tags))
                    .col(json_null(Portfolio::Description))
                    .col(json_null(Portfolio::WorksCompleted))
                    .col(string_null(Portfolio::Budget))
                    .col(string_null(Portfolio::Duration))
                    .col(json_null(Portfolio::Team))
                    .col(json_null(Portfolio::Materials))
                    .col(json_null(Portfolio::Gallery))
                    .col(string_null(Portfolio::VideoUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Portfolio::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Portfolio {
    Table,
    Id,
    Type,
    Title,
    ImgBefore,
    ImgAfter,
    Area,
    Term,
    Cost,
    Location,
    IsNewBuilding,
    Tags,
    Description,
    WorksCompleted,
    Budget,
    Duration,
    Team,
    Materials,
    Gallery,
    VideoUrl,
}
