//! Database model type aliases for test utilities.

/// Type alias for the application user database model.
pub type UserModel = entity::app_user::Model;

/// Type alias for the debt database model.
pub type DebtModel = entity::debt::Model;

/// Type alias for the debt state database model.
pub type DebtStateModel = entity::debt_state::Model;
