use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{
    error::TestError,
    model::{DebtModel, DebtStateModel},
};

/// Names of the reference states inserted by [`seed_debt_states`], in order.
pub const STATE_NAMES: [&str; 3] = ["Pending", "In Progress", "Paid"];

/// Inserts the reference debt states and returns them in [`STATE_NAMES`] order.
pub async fn seed_debt_states(db: &DatabaseConnection) -> Result<Vec<DebtStateModel>, TestError> {
    let mut states = Vec::with_capacity(STATE_NAMES.len());

    for name in STATE_NAMES {
        let state = entity::debt_state::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        states.push(state.insert(db).await?);
    }

    Ok(states)
}

/// Inserts a debt dated now.
pub async fn insert_debt(
    db: &DatabaseConnection,
    user_id: i32,
    amount: Decimal,
    state_id: i32,
) -> Result<DebtModel, TestError> {
    insert_debt_with_date(db, user_id, amount, Utc::now().naive_utc(), state_id).await
}

/// Inserts a debt with an explicit creation date.
pub async fn insert_debt_with_date(
    db: &DatabaseConnection,
    user_id: i32,
    amount: Decimal,
    creation_date: NaiveDateTime,
    state_id: i32,
) -> Result<DebtModel, TestError> {
    let debt = entity::debt::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        amount: ActiveValue::Set(amount),
        creation_date: ActiveValue::Set(creation_date),
        state_id: ActiveValue::Set(state_id),
        ..Default::default()
    };

    Ok(debt.insert(db).await?)
}
