use debita_test_utils::prelude::*;

use crate::server::service::user::UserService;

/// Expect the registered user back, credential stripped
#[tokio::test]
async fn verifies_registered_credentials() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::AppUser)?;

    let user_service = UserService::new(&test.db);

    let created = user_service.create_user("a@b.com", "pw1").await.unwrap();

    let verified = user_service.verify_credentials("a@b.com", "pw1").await?;

    assert_eq!(verified, Some(created));

    Ok(())
}

/// Expect no match for a wrong password
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::AppUser)?;

    let user_service = UserService::new(&test.db);

    user_service.create_user("a@b.com", "pw1").await.unwrap();

    let verified = user_service.verify_credentials("a@b.com", "wrong").await?;

    assert!(verified.is_none());

    Ok(())
}

/// Expect no match for an unknown email, not an error
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::AppUser)?;

    let user_service = UserService::new(&test.db);

    let verified = user_service.verify_credentials("a@b.com", "pw1").await?;

    assert!(verified.is_none());

    Ok(())
}

/// Expect a malformed stored credential to read as no match
#[tokio::test]
async fn rejects_malformed_stored_credential() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::AppUser)?;

    fixtures::user::insert_user(&test.db, "a@b.com", "not-a-credential").await?;

    let user_service = UserService::new(&test.db);

    let verified = user_service.verify_credentials("a@b.com", "pw1").await?;

    assert!(verified.is_none());

    Ok(())
}
