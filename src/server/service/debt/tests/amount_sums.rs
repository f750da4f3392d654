use debita_test_utils::prelude::*;

use super::{amount, seed};
use crate::{
    model::debt::AmountSumDto,
    server::{cache::key, service::debt::DebtService, util::test::cache::FakeCache},
};

/// Expect per-state totals for the user's debts only
#[tokio::test]
async fn sums_amounts_grouped_by_state() -> Result<(), TestError> {
    let test = test_setup_with_debt_tables!()?;
    let (states, owner, other) = seed(&test.db).await?;

    fixtures::debt::insert_debt(&test.db, owner, amount(5000), states.pending).await?;
    fixtures::debt::insert_debt(&test.db, owner, amount(2500), states.pending).await?;
    fixtures::debt::insert_debt(&test.db, owner, amount(1000), states.in_progress).await?;
    fixtures::debt::insert_debt(&test.db, other, amount(9900), states.pending).await?;

    let cache = FakeCache::new();
    let debt_service = DebtService::new(&test.db, &cache);

    let sums = debt_service.amount_sums_by_state(owner).await?;

    assert_eq!(
        sums,
        vec![
            AmountSumDto {
                state_id: states.pending,
                total_amount: amount(7500),
            },
            AmountSumDto {
                state_id: states.in_progress,
                total_amount: amount(1000),
            },
        ]
    );

    Ok(())
}

/// Expect states without debts to be omitted rather than zeroed
#[tokio::test]
async fn omits_states_without_debts() -> Result<(), TestError> {
    let test = test_setup_with_debt_tables!()?;
    let (states, owner, _) = seed(&test.db).await?;

    fixtures::debt::insert_debt(&test.db, owner, amount(5000), states.pending).await?;

    let cache = FakeCache::new();
    let debt_service = DebtService::new(&test.db, &cache);

    let sums = debt_service.amount_sums_by_state(owner).await?;

    assert_eq!(sums.len(), 1);
    assert_eq!(sums[0].state_id, states.pending);

    Ok(())
}

/// Expect a seeded aggregate entry to be served from cache
#[tokio::test]
async fn serves_cached_sums() -> Result<(), TestError> {
    let test = test_setup_with_debt_tables!()?;
    let (states, owner, _) = seed(&test.db).await?;

    let marker = vec![AmountSumDto {
        state_id: states.paid,
        total_amount: amount(42),
    }];

    let cache = FakeCache::new();
    cache.seed(&key::user_amount_sums(owner), &marker);

    let debt_service = DebtService::new(&test.db, &cache);

    let sums = debt_service.amount_sums_by_state(owner).await?;

    assert_eq!(sums, marker);

    Ok(())
}

/// Expect storage results and zero cache calls while unavailable
#[tokio::test]
async fn bypasses_unavailable_cache() -> Result<(), TestError> {
    let test = test_setup_with_debt_tables!()?;
    let (states, owner, _) = seed(&test.db).await?;

    fixtures::debt::insert_debt(&test.db, owner, amount(5000), states.pending).await?;

    let cache = FakeCache::unavailable();
    let debt_service = DebtService::new(&test.db, &cache);

    let sums = debt_service.amount_sums_by_state(owner).await?;

    assert_eq!(sums.len(), 1);
    assert!(cache.get_keys().is_empty());
    assert!(cache.set_keys().is_empty());

    Ok(())
}
