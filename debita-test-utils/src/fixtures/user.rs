use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{error::TestError, model::UserModel};

/// Inserts a user row directly, bypassing credential hashing.
///
/// The `password` value is stored verbatim; pass an already-formatted
/// `salt.hash` string when a test needs to verify credentials.
pub async fn insert_user(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> Result<UserModel, TestError> {
    let user = entity::app_user::ActiveModel {
        email: ActiveValue::Set(email.to_string()),
        password: ActiveValue::Set(password.to_string()),
        ..Default::default()
    };

    Ok(user.insert(db).await?)
}
