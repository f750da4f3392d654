use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250710_000001_create_app_user_table::AppUser,
    m20250710_000002_create_debt_states_table::DebtStates,
};

static FK_DEBT_USER_ID: &str = "fk_debt_user_id";
static FK_DEBT_STATE_ID: &str = "fk_debt_state_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Debt::Table)
                    .if_not_exists()
                    .col(pk_auto(Debt::Id))
                    .col(integer(Debt::UserId))
                    .col(decimal_len(Debt::Amount, 12, 2))
                    .col(timestamp(Debt::CreationDate))
                    .col(integer(Debt::StateId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DEBT_USER_ID)
                    .from_tbl(Debt::Table)
                    .from_col(Debt::UserId)
                    .to_tbl(AppUser::Table)
                    .to_col(AppUser::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DEBT_STATE_ID)
                    .from_tbl(Debt::Table)
                    .from_col(Debt::StateId)
                    .to_tbl(DebtStates::Table)
                    .to_col(DebtStates::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DEBT_USER_ID)
                    .table(Debt::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DEBT_STATE_ID)
                    .table(Debt::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Debt::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Debt {
    Table,
    Id,
    UserId,
    Amount,
    CreationDate,
    StateId,
}
