use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DebtDto {
    pub id: i32,
    pub user_id: i32,
    pub amount: Decimal,
    pub creation_date: NaiveDateTime,
    pub state_id: i32,
}

impl From<entity::debt::Model> for DebtDto {
    fn from(debt: entity::debt::Model) -> Self {
        Self {
            id: debt.id,
            user_id: debt.user_id,
            amount: debt.amount,
            creation_date: debt.creation_date,
            state_id: debt.state_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DebtStateDto {
    pub id: i32,
    pub name: String,
}

impl From<entity::debt_state::Model> for DebtStateDto {
    fn from(state: entity::debt_state::Model) -> Self {
        Self {
            id: state.id,
            name: state.name,
        }
    }
}

/// Per-state amount total for one user; never persisted, only cached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AmountSumDto {
    pub state_id: i32,
    pub total_amount: Decimal,
}

/// Request body for debt creation; missing fields are rejected by the
/// service with a descriptive message.
#[derive(Deserialize, ToSchema)]
pub struct CreateDebtDto {
    pub amount: Option<Decimal>,
    pub creation_date: Option<NaiveDateTime>,
    pub state_id: Option<i32>,
}

/// Request body for debt updates.
#[derive(Deserialize, ToSchema)]
pub struct UpdateDebtDto {
    pub amount: Option<Decimal>,
    pub state_id: Option<i32>,
}

/// The response to a delete request.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct DeletedDto {
    /// Number of rows removed (0 or 1)
    pub deleted: u64,
}
