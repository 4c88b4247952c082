pub use sea_orm_migration::prelude::*;

mod m20251101_000001_company;
mod m20251101_000002_website;
mod m20251101_000003_purpose;
mod m20251101_000004_custom_field;
mod m20251101_000005_collection_point;
mod m20251101_000006_collection_point_purpose;
mod m20251101_000007_collection_point_custom_field;
mod m20251101_000008_consent_page;
mod m20251101_000009_consent;
mod m20251101_000010_file;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_company::Migration),
            Box::new(m20251101_000002_website::Migration),
            Box::new(m20251101_000003_purpose::Migration),
            Box::new(m20251101_000004_custom_field::Migration),
            Box::new(m20251101_000005_collection_point::Migration),
            Box::new(m20251101_000006_collection_point_purpose::Migration),
            Box::new(m20251101_000007_collection_point_custom_field::Migration),
            Box::new(m20251101_000008_consent_page::Migration),
            Box::new(m20251101_000009_consent::Migration),
            Box::new(m20251101_000010_file::Migration),
        ]
    }
}
