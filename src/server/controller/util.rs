use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::SessionUserId,
};

/// Retrieves the logged-in user's ID from the session.
///
/// # Returns
/// - `Ok(i32)` - The user ID stored at login
/// - `Err(Error::AuthError)` - No user in session
pub async fn current_user_id(session: &Session) -> Result<i32, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    Ok(user_id)
}
