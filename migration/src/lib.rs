pub use sea_orm_migration::prelude::*;

mod m20240110_000001_create_users_table;
mod m20240110_000002_create_cv_tables;
mod m20240110_000003_create_owner_tables;
mod m20240110_000004_seed_initial_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240110_000001_create_users_table::Migration),
            Box::new(m20240110_000002_create_cv_tables::Migration),
            Box::new(m20240110_000003_create_owner_tables::Migration),
            Box::new(m20240110_000004_seed_initial_data::Migration),
        ]
    }
}
