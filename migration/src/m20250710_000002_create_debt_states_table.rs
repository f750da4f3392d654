use sea_orm_migration::{prelude::*, schema::*};

/// Reference states seeded at creation; `Paid` is the terminal state.
static SEED_STATE_NAMES: [&str; 3] = ["Pending", "In Progress", "Paid"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DebtStates::Table)
                    .if_not_exists()
                    .col(pk_auto(DebtStates::Id))
                    .col(string(DebtStates::Name))
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert()
            .into_table(DebtStates::Table)
            .columns([DebtStates::Name])
            .to_owned();

        for name in SEED_STATE_NAMES {
            insert.values_panic([name.into()]);
        }

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DebtStates::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DebtStates {
    Table,
    Id,
    Name,
}
