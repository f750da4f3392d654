use chrono::Utc;
use debita_test_utils::prelude::*;

use super::{amount, seed, validation_message};
use crate::{
    model::debt::DebtDto,
    server::{
        cache::key,
        service::debt::DebtService,
        util::test::cache::FakeCache,
    },
};

/// Expect only the owner's debts, in insertion order
#[tokio::test]
async fn returns_debts_for_user() -> Result<(), TestError> {
    let test = test_setup_with_debt_tables!()?;
    let (states, owner, other) = seed(&test.db).await?;

    let first = fixtures::debt::insert_debt(&test.db, owner, amount(5000), states.pending).await?;
    let second =
        fixtures::debt::insert_debt(&test.db, owner, amount(2500), states.in_progress).await?;
    fixtures::debt::insert_debt(&test.db, other, amount(9900), states.pending).await?;

    let cache = FakeCache::new();
    let debt_service = DebtService::new(&test.db, &cache);

    let debts = debt_service.list_debts(Some(owner), None).await?;

    assert_eq!(
        debts.iter().map(|d| d.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    Ok(())
}

/// Expect the state filter to narrow the list
#[tokio::test]
async fn filters_by_state() -> Result<(), TestError> {
    let test = test_setup_with_debt_tables!()?;
    let (states, owner, _) = seed(&test.db).await?;

    let pending_debt =
        fixtures::debt::insert_debt(&test.db, owner, amount(5000), states.pending).await?;
    fixtures::debt::insert_debt(&test.db, owner, amount(2500), states.in_progress).await?;

    let cache = FakeCache::new();
    let debt_service = DebtService::new(&test.db, &cache);

    let debts = debt_service
        .list_debts(Some(owner), Some(states.pending))
        .await?;

    assert_eq!(debts.len(), 1);
    assert_eq!(debts[0].id, pending_debt.id);

    Ok(())
}

/// Expect a validation error when no user id is supplied
#[tokio::test]
async fn fails_without_user_id() -> Result<(), TestError> {
    let test = test_setup_with_debt_tables!()?;

    let cache = FakeCache::new();
    let debt_service = DebtService::new(&test.db, &cache);

    let result = debt_service.list_debts(None, None).await;

    assert!(result.is_err());
    assert_eq!(
        validation_message(result.unwrap_err()),
        "User ID is required to get user debts"
    );

    Ok(())
}

/// Expect a seeded cache entry to be served without touching storage
#[tokio::test]
async fn serves_cached_list() -> Result<(), TestError> {
    let test = test_setup_with_debt_tables!()?;
    let (states, owner, _) = seed(&test.db).await?;

    fixtures::debt::insert_debt(&test.db, owner, amount(5000), states.pending).await?;

    // A marker row that exists only in the cache
    let marker = DebtDto {
        id: 999,
        user_id: owner,
        amount: amount(123),
        creation_date: Utc::now().naive_utc(),
        state_id: states.pending,
    };

    let cache = FakeCache::new();
    cache.seed(&key::user_debts(owner), &vec![marker.clone()]);

    let debt_service = DebtService::new(&test.db, &cache);

    let debts = debt_service.list_debts(Some(owner), None).await?;

    assert_eq!(debts, vec![marker]);

    Ok(())
}

/// Expect a miss to populate the cache under the list key
#[tokio::test]
async fn caches_list_on_miss() -> Result<(), TestError> {
    let test = test_setup_with_debt_tables!()?;
    let (states, owner, _) = seed(&test.db).await?;

    fixtures::debt::insert_debt(&test.db, owner, amount(5000), states.pending).await?;

    let cache = FakeCache::new();
    let debt_service = DebtService::new(&test.db, &cache);

    debt_service.list_debts(Some(owner), None).await?;

    assert!(cache.contains(&key::user_debts(owner)));
    assert_eq!(cache.set_keys(), vec![key::user_debts(owner)]);

    Ok(())
}

/// Expect correct data and zero cache calls while the cache is unavailable
#[tokio::test]
async fn bypasses_unavailable_cache() -> Result<(), TestError> {
    let test = test_setup_with_debt_tables!()?;
    let (states, owner, _) = seed(&test.db).await?;

    let debt = fixtures::debt::insert_debt(&test.db, owner, amount(5000), states.pending).await?;

    let cache = FakeCache::unavailable();
    let debt_service = DebtService::new(&test.db, &cache);

    let debts = debt_service.list_debts(Some(owner), None).await?;

    assert_eq!(debts.len(), 1);
    assert_eq!(debts[0].id, debt.id);
    assert!(cache.get_keys().is_empty());
    assert!(cache.set_keys().is_empty());

    Ok(())
}
