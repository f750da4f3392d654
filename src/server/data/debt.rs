use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, QueryFilter, QueryOrder, QuerySelect,
};

/// One row of the per-state amount aggregation.
#[derive(Debug, PartialEq, FromQueryResult)]
pub struct DebtAmountSum {
    pub state_id: i32,
    pub total_amount: Decimal,
}

pub struct DebtRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DebtRepository<'a> {
    /// Creates a new instance of [`DebtRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get all debts owned by a user, in insertion order
    pub async fn get_all_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::debt::Model>, DbErr> {
        entity::prelude::Debt::find()
            .filter(entity::debt::Column::UserId.eq(user_id))
            .order_by_asc(entity::debt::Column::Id)
            .all(self.db)
            .await
    }

    /// Get a user's debts filtered to a single state, in insertion order
    pub async fn get_by_state_and_user(
        &self,
        user_id: i32,
        state_id: i32,
    ) -> Result<Vec<entity::debt::Model>, DbErr> {
        entity::prelude::Debt::find()
            .filter(entity::debt::Column::UserId.eq(user_id))
            .filter(entity::debt::Column::StateId.eq(state_id))
            .order_by_asc(entity::debt::Column::Id)
            .all(self.db)
            .await
    }

    /// Get a single debt scoped by owner.
    ///
    /// The predicate includes both id and owner, so a debt owned by
    /// another user is indistinguishable from a missing one.
    pub async fn get_by_id_and_user(
        &self,
        debt_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::debt::Model>, DbErr> {
        entity::prelude::Debt::find()
            .filter(entity::debt::Column::Id.eq(debt_id))
            .filter(entity::debt::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Sum a user's debt amounts grouped by state.
    ///
    /// States without a matching row do not appear in the result.
    pub async fn amount_sums_by_state(&self, user_id: i32) -> Result<Vec<DebtAmountSum>, DbErr> {
        entity::prelude::Debt::find()
            .select_only()
            .column(entity::debt::Column::StateId)
            .column_as(entity::debt::Column::Amount.sum(), "total_amount")
            .filter(entity::debt::Column::UserId.eq(user_id))
            .group_by(entity::debt::Column::StateId)
            .order_by_asc(entity::debt::Column::StateId)
            .into_model::<DebtAmountSum>()
            .all(self.db)
            .await
    }

    /// Create a debt
    pub async fn create(
        &self,
        user_id: i32,
        amount: Decimal,
        creation_date: NaiveDateTime,
        state_id: i32,
    ) -> Result<entity::debt::Model, DbErr> {
        let debt = entity::debt::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            amount: ActiveValue::Set(amount),
            creation_date: ActiveValue::Set(creation_date),
            state_id: ActiveValue::Set(state_id),
            ..Default::default()
        };

        debt.insert(self.db).await
    }

    /// Set a debt's amount and state unless its current state is blocked.
    ///
    /// The owner scope, the id match and the blocked-state guard are all
    /// part of one conditional statement; splitting this into a check
    /// query followed by a write would let a concurrent transition slip
    /// between the two. Returns `None` when zero rows matched.
    pub async fn update_if_not_in_state(
        &self,
        debt_id: i32,
        user_id: i32,
        amount: Decimal,
        state_id: i32,
        blocked_state_id: i32,
    ) -> Result<Option<entity::debt::Model>, DbErr> {
        let mut updated = entity::prelude::Debt::update_many()
            .col_expr(entity::debt::Column::Amount, Expr::value(amount))
            .col_expr(entity::debt::Column::StateId, Expr::value(state_id))
            .filter(entity::debt::Column::Id.eq(debt_id))
            .filter(entity::debt::Column::UserId.eq(user_id))
            .filter(entity::debt::Column::StateId.ne(blocked_state_id))
            .exec_with_returning(self.db)
            .await?;

        Ok(updated.pop())
    }

    /// Delete a debt scoped by owner; returns the affected-row count
    pub async fn delete_by_id_and_user(&self, debt_id: i32, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Debt::delete_many()
            .filter(entity::debt::Column::Id.eq(debt_id))
            .filter(entity::debt::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
