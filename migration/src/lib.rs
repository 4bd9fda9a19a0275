//! Schema migrations for the todo service.
//!
//! Applied once at startup through `Migrator::up`; already-applied steps are
//! skipped by `sea-orm-migration`'s bookkeeping table.

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_todos_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_todos_table::Migration)]
    }
}
