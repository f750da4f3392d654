use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_ID_KEY: &str = "debita:user:id";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserId(pub i32);

impl SessionUserId {
    /// Insert user ID into session
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id))
            .await?;

        Ok(())
    }

    /// Get user ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        let maybe_user_id = session.get::<SessionUserId>(SESSION_USER_ID_KEY).await?;

        Ok(maybe_user_id.map(|SessionUserId(user_id)| user_id))
    }
}

#[cfg(test)]
mod tests {
    mod session_insert_user_id_tests {
        use debita_test_utils::prelude::*;

        use crate::server::model::session::SessionUserId;

        /// Expect success when inserting a user ID into the session
        #[tokio::test]
        async fn inserts_user_id() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let result = SessionUserId::insert(&test.session, 1).await;

            assert!(result.is_ok());

            Ok(())
        }
    }

    mod session_get_user_id_tests {
        use debita_test_utils::prelude::*;

        use crate::server::model::session::SessionUserId;

        /// Expect Some when a user ID is present in the session
        #[tokio::test]
        async fn returns_stored_user_id() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            SessionUserId::insert(&test.session, 1).await.unwrap();

            let result = SessionUserId::get(&test.session).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap(), Some(1));

            Ok(())
        }

        /// Expect None when no user ID is present in the session
        #[tokio::test]
        async fn returns_none_for_empty_session() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let result = SessionUserId::get(&test.session).await;

            assert!(result.is_ok());
            assert!(result.unwrap().is_none());

            Ok(())
        }
    }
}
