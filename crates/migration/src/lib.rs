//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20230101_000001_create_ciudad;
mod m20230101_000002_create_supermercado;
mod m20230101_000003_create_ciudad_supermercado;
mod m20230101_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230101_000001_create_ciudad::Migration),
            Box::new(m20230101_000002_create_supermercado::Migration),
            // The join table references both sides
            Box::new(m20230101_000003_create_ciudad_supermercado::Migration),
            // Indexes should always be applied last
            Box::new(m20230101_000004_add_indexes::Migration),
        ]
    }
}
