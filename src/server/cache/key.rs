//! Deterministic cache key builders.
//!
//! Keys are composites of entity kind, owner id and optional filter so
//! that every mutation can name exactly the entries it may have staled.

/// All debts owned by a user, unfiltered.
pub fn user_debts(user_id: i32) -> String {
    format!("debts:{}", user_id)
}

/// A user's debts filtered to a single state.
pub fn user_debts_by_state(user_id: i32, state_id: i32) -> String {
    format!("debts:{}:{}", user_id, state_id)
}

/// A single debt scoped to its owner.
pub fn user_debt(debt_id: i32, user_id: i32) -> String {
    format!("debt:{}:{}", debt_id, user_id)
}

/// Per-state amount totals for a user.
pub fn user_amount_sums(user_id: i32) -> String {
    format!("amount_sums:{}", user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_scoped_by_owner_and_filter() {
        assert_eq!(user_debts(1), "debts:1");
        assert_eq!(user_debts_by_state(1, 3), "debts:1:3");
        assert_eq!(user_debt(42, 1), "debt:42:1");
        assert_eq!(user_amount_sums(1), "amount_sums:1");
    }

    #[test]
    fn keys_for_different_owners_never_collide() {
        assert_ne!(user_debts(1), user_debts(2));
        assert_ne!(user_debt(1, 2), user_debt(2, 1));
    }
}
