//! Data access layer repositories.
//!
//! Repositories own the SQL semantics of the application: row shaping,
//! owner-scoped predicates and the one conditional update that must stay
//! atomic. Everything above this layer speaks in models and DTOs.

pub mod debt;
pub mod debt_state;
pub mod user;
