//! Migrator registering one migration per resource table.
//! Tables are independent (no foreign keys), so order only matters for readability.
pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_catalog;
mod m20250301_000002_create_leads;
mod m20250301_000003_create_projects;
mod m20250301_000004_create_portfolio;
mod m20250301_000005_create_service_categories;
mod m20250301_000006_create_stories;
mod m20250301_000007_create_calculator_settings;
mod m20250301_000008_create_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_catalog::Migration),
            Box::new(m20250301_000002_create_leads::Migration),
            Box::new(m20250301_000003_create_projects::Migration),
            Box::new(m20250301_000004_create_portfolio::Migration),
            Box::new(m20250301_000005_create_service_categories::Migration),
            Box::new(m20250301_000006_create_stories::Migration),
            Box::new(m20250301_000007_create_calculator_settings::Migration),
            Box::new(m20250301_000008_create_users::Migration),
        ]
    }
}
