mod amount_sums;
mod list_debts;

use debita_test_utils::prelude::*;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::server::error::Error;

pub struct TestStates {
    pub pending: i32,
    pub in_progress: i32,
    pub paid: i32,
}

/// Seeds the reference states and two users; returns the state ids and
/// the (owner, other) user ids.
async fn seed(db: &DatabaseConnection) -> Result<(TestStates, i32, i32), TestError> {
    let states = fixtures::debt::seed_debt_states(db).await?;
    let owner = fixtures::user::insert_user(db, "owner@b.com", "salt.hash").await?;
    let other = fixtures::user::insert_user(db, "other@b.com", "salt.hash").await?;

    let states = TestStates {
        pending: states[0].id,
        in_progress: states[1].id,
        paid: states[2].id,
    };

    Ok((states, owner.id, other.id))
}

/// Unwraps a validation error into its message.
fn validation_message(err: Error) -> String {
    match err {
        Error::Validation(message) => message,
        other => panic!("expected validation error, got {:?}", other),
    }
}

/// Shorthand for a two-decimal amount given in cents.
fn amount(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}
