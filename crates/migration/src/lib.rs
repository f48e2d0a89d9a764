//! Migrator creating the catalog schema.
//! Every migration uses `if_not_exists`, so running `up` at startup is idempotent.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_services;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_services::Migration)]
    }
}
