pub use sea_orm_migration::prelude::*;

mod m20250710_000001_create_app_user_table;
mod m20250710_000002_create_debt_states_table;
mod m20250710_000003_create_debt_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250710_000001_create_app_user_table::Migration),
            Box::new(m20250710_000002_create_debt_states_table::Migration),
            Box::new(m20250710_000003_create_debt_table::Migration),
        ]
    }
}
