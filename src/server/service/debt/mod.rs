//! Debt service layer.
//!
//! The authoritative business-rule boundary for debt records: ownership
//! scoping, the terminal-state rule, input validation, and the
//! read-through / write-invalidate cache orchestration in front of the
//! repositories.

#[cfg(test)]
mod tests;

use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    model::debt::{AmountSumDto, DebtDto, DebtStateDto},
    server::{
        cache::{key, Cache, CACHE_TTL},
        data::{debt::DebtRepository, debt_state::DebtStateRepository},
        error::Error,
    },
};

/// Name of the terminal state. The id is resolved from reference data at
/// mutation time; only the name is fixed.
pub const PAID_STATE_NAME: &str = "Paid";

/// Input for debt creation. Fields are optional so the service owns the
/// required-field policy; validation runs in a fixed order and the first
/// violated rule wins.
#[derive(Clone, Debug, Default)]
pub struct NewDebt {
    pub user_id: Option<i32>,
    pub amount: Option<Decimal>,
    pub creation_date: Option<NaiveDateTime>,
    pub state_id: Option<i32>,
}

/// Input for debt updates. Only amount and state are mutable; the
/// creation date is fixed at creation.
#[derive(Clone, Debug, Default)]
pub struct DebtUpdate {
    pub id: Option<i32>,
    pub user_id: Option<i32>,
    pub amount: Option<Decimal>,
    pub state_id: Option<i32>,
}

/// Service for managing debt records.
///
/// Generic over the cache port so tests can substitute a fake; the cache
/// is consulted only while its availability gate reports ready.
pub struct DebtService<'a, C: Cache> {
    db: &'a DatabaseConnection,
    cache: &'a C,
}

impl<'a, C: Cache> DebtService<'a, C> {
    /// Creates a new instance of [`DebtService`]
    pub fn new(db: &'a DatabaseConnection, cache: &'a C) -> Self {
        Self { db, cache }
    }

    /// Retrieves a user's debts in insertion order, optionally filtered
    /// to a single state.
    ///
    /// # Returns
    /// - `Ok(Vec<DebtDto>)` - The debts, from cache or storage
    /// - `Err(Error::Validation)` - No user id supplied
    pub async fn list_debts(
        &self,
        user_id: Option<i32>,
        state_id: Option<i32>,
    ) -> Result<Vec<DebtDto>, Error> {
        let Some(user_id) = user_id else {
            return Err(Error::Validation(
                "User ID is required to get user debts".to_string(),
            ));
        };

        let cache_key = match state_id {
            Some(state_id) => key::user_debts_by_state(user_id, state_id),
            None => key::user_debts(user_id),
        };

        if self.cache.is_ready() {
            if let Some(debts) = self.cache.try_get::<Vec<DebtDto>>(&cache_key).await {
                return Ok(debts);
            }
        }

        let debt_repo = DebtRepository::new(self.db);

        let debts = match state_id {
            Some(state_id) => debt_repo.get_by_state_and_user(user_id, state_id).await?,
            None => debt_repo.get_all_by_user_id(user_id).await?,
        };
        let debts: Vec<DebtDto> = debts.into_iter().map(DebtDto::from).collect();

        if self.cache.is_ready() {
            self.cache.set(&cache_key, &debts, CACHE_TTL).await;
        }

        Ok(debts)
    }

    /// Retrieves a single debt scoped by owner.
    ///
    /// A debt owned by another user is indistinguishable from a missing
    /// one; both return `Ok(None)`.
    pub async fn get_debt(&self, debt_id: i32, user_id: i32) -> Result<Option<DebtDto>, Error> {
        let cache_key = key::user_debt(debt_id, user_id);

        if self.cache.is_ready() {
            if let Some(debt) = self.cache.try_get::<DebtDto>(&cache_key).await {
                return Ok(Some(debt));
            }
        }

        let maybe_debt = DebtRepository::new(self.db)
            .get_by_id_and_user(debt_id, user_id)
            .await?
            .map(DebtDto::from);

        // Absent rows are never cached.
        if self.cache.is_ready() {
            if let Some(ref debt) = maybe_debt {
                self.cache.set(&cache_key, debt, CACHE_TTL).await;
            }
        }

        Ok(maybe_debt)
    }

    /// Retrieves a user's debt amounts summed per state.
    ///
    /// Only states with at least one debt appear in the result.
    pub async fn amount_sums_by_state(&self, user_id: i32) -> Result<Vec<AmountSumDto>, Error> {
        let cache_key = key::user_amount_sums(user_id);

        if self.cache.is_ready() {
            if let Some(sums) = self.cache.try_get::<Vec<AmountSumDto>>(&cache_key).await {
                return Ok(sums);
            }
        }

        let sums: Vec<AmountSumDto> = DebtRepository::new(self.db)
            .amount_sums_by_state(user_id)
            .await?
            .into_iter()
            .map(|row| AmountSumDto {
                state_id: row.state_id,
                total_amount: row.total_amount,
            })
            .collect();

        if self.cache.is_ready() {
            self.cache.set(&cache_key, &sums, CACHE_TTL).await;
        }

        Ok(sums)
    }

    /// Retrieves the reference debt states.
    ///
    /// Loaded straight from storage; the set is small and read-only.
    pub async fn get_debt_states(&self) -> Result<Vec<DebtStateDto>, Error> {
        let states = DebtStateRepository::new(self.db).get_all().await?;

        Ok(states.into_iter().map(DebtStateDto::from).collect())
    }

    /// Creates a debt from validated input.
    ///
    /// The creation date defaults to now when omitted. Afterwards the
    /// owner's list, state-filtered list and aggregate entries are
    /// invalidated.
    pub async fn create_debt(&self, input: NewDebt) -> Result<DebtDto, Error> {
        let (user_id, amount, state_id) = validate_new_debt(&input)?;
        let creation_date = input.creation_date.unwrap_or_else(|| Utc::now().naive_utc());

        let debt = DebtRepository::new(self.db)
            .create(user_id, amount, creation_date, state_id)
            .await?;

        self.invalidate_for_mutation(user_id, Some(state_id), None)
            .await;

        Ok(DebtDto::from(debt))
    }

    /// Applies an amount/state update unless the debt is missing, owned
    /// by another user, or already in the terminal state.
    ///
    /// The guard is part of the update statement itself, so a concurrent
    /// transition to `Paid` cannot slip between a check and the write.
    ///
    /// # Returns
    /// - `Ok(Some(DebtDto))` - The updated row
    /// - `Ok(None)` - Not applied; the cases are indistinguishable
    pub async fn update_debt(&self, input: DebtUpdate) -> Result<Option<DebtDto>, Error> {
        let (debt_id, user_id, amount, state_id) = validate_debt_update(&input)?;

        let paid_state_id = self.paid_state_id().await?;

        let updated = DebtRepository::new(self.db)
            .update_if_not_in_state(debt_id, user_id, amount, state_id, paid_state_id)
            .await?;

        let Some(updated) = updated else {
            return Ok(None);
        };

        self.invalidate_for_mutation(user_id, Some(updated.state_id), Some(debt_id))
            .await;

        Ok(Some(DebtDto::from(updated)))
    }

    /// Deletes a debt scoped by owner and returns the affected-row count.
    ///
    /// Deleting is allowed in every state, including the terminal one.
    /// The state id is only used to target the filtered-list cache entry.
    pub async fn delete_debt(
        &self,
        debt_id: i32,
        user_id: i32,
        state_id: Option<i32>,
    ) -> Result<u64, Error> {
        let deleted = DebtRepository::new(self.db)
            .delete_by_id_and_user(debt_id, user_id)
            .await?;

        self.invalidate_for_mutation(user_id, state_id, Some(debt_id))
            .await;

        Ok(deleted)
    }

    async fn paid_state_id(&self) -> Result<i32, Error> {
        let state = DebtStateRepository::new(self.db)
            .find_by_name(PAID_STATE_NAME)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Reference state {:?} is missing from DEBT_STATES",
                    PAID_STATE_NAME
                ))
            })?;

        Ok(state.id)
    }

    /// Drops every cache entry whose content could now be stale for the
    /// affected owner.
    async fn invalidate_for_mutation(
        &self,
        user_id: i32,
        state_id: Option<i32>,
        debt_id: Option<i32>,
    ) {
        if !self.cache.is_ready() {
            return;
        }

        let mut keys = vec![key::user_debts(user_id), key::user_amount_sums(user_id)];

        if let Some(state_id) = state_id {
            keys.push(key::user_debts_by_state(user_id, state_id));
        }
        if let Some(debt_id) = debt_id {
            keys.push(key::user_debt(debt_id, user_id));
        }

        self.cache.invalidate(&keys).await;
    }
}

/// Checks creation input in fixed order; the first violated rule wins and
/// exactly one message is surfaced per call.
fn validate_new_debt(input: &NewDebt) -> Result<(i32, Decimal, i32), Error> {
    let Some(user_id) = input.user_id else {
        return Err(Error::Validation("User ID is required".to_string()));
    };
    let Some(amount) = input.amount else {
        return Err(Error::Validation("Amount is required".to_string()));
    };
    let Some(state_id) = input.state_id else {
        return Err(Error::Validation("Debt state ID is required".to_string()));
    };
    if amount <= Decimal::ZERO {
        return Err(Error::Validation(
            "Amount must be a positive number".to_string(),
        ));
    }

    Ok((user_id, amount, state_id))
}

/// Same policy as [`validate_new_debt`], with the debt id checked first.
fn validate_debt_update(input: &DebtUpdate) -> Result<(i32, i32, Decimal, i32), Error> {
    let Some(debt_id) = input.id else {
        return Err(Error::Validation("Debt ID is required".to_string()));
    };
    let Some(user_id) = input.user_id else {
        return Err(Error::Validation("User ID is required".to_string()));
    };
    let Some(amount) = input.amount else {
        return Err(Error::Validation("Amount is required".to_string()));
    };
    let Some(state_id) = input.state_id else {
        return Err(Error::Validation("Debt state ID is required".to_string()));
    };
    if amount <= Decimal::ZERO {
        return Err(Error::Validation(
            "Amount must be a positive number".to_string(),
        ));
    }

    Ok((debt_id, user_id, amount, state_id))
}
