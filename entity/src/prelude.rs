pub use super::app_user::Entity as AppUser;
pub use super::debt::Entity as Debt;
pub use super::debt_state::Entity as DebtState;
