use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{CredentialsDto, UserDto},
    },
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::SessionUserId},
        service::user::UserService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Register a new user
///
/// # Responses
/// - 201 (Created): The new user, credential stripped
/// - 400 (Bad Request): Missing fields or malformed email
/// - 409 (Conflict): Email already registered
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Missing fields or malformed email", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    axum::Json(credentials): axum::Json<CredentialsDto>,
) -> Result<impl IntoResponse, Error> {
    let (email, password) = require_credentials(&credentials)?;

    if !is_valid_email(email) {
        return Err(Error::Validation("Invalid email format".to_string()));
    }

    let user = UserService::new(&state.db).create_user(email, password).await?;

    Ok((StatusCode::CREATED, axum::Json(user)))
}

/// Log in with email and password
///
/// Stores the user ID in the session on success.
///
/// # Responses
/// - 200 (OK): The authenticated user
/// - 400 (Bad Request): Missing fields
/// - 401 (Unauthorized): Unknown email or wrong password, indistinguishable
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    axum::Json(credentials): axum::Json<CredentialsDto>,
) -> Result<impl IntoResponse, Error> {
    let (email, password) = require_credentials(&credentials)?;

    let Some(user) = UserService::new(&state.db)
        .verify_credentials(email, password)
        .await?
    else {
        return Err(Error::AuthError(AuthError::InvalidCredentials));
    };

    SessionUserId::insert(&session, user.id).await?;

    Ok((StatusCode::OK, axum::Json(user)))
}

/// Log the user out by clearing their session
///
/// # Responses
/// - 200 (OK): Logged out, also when no session existed
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only clear session if there is actually a user in session
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(StatusCode::OK)
}

/// Get the currently logged in user
///
/// # Responses
/// - 200 (OK): The current user
/// - 404 (Not Found): No session, or the session points at a deleted user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let Some(user_id) = SessionUserId::get(&session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        // Clear session for user not found in database
        session.clear().await;

        tracing::warn!(
            "Failed to find user ID {} in database despite having an active session; \
            cleared session for user, they will need to log in again",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok((StatusCode::OK, axum::Json(user)))
}

fn require_credentials(credentials: &CredentialsDto) -> Result<(&str, &str), Error> {
    match (&credentials.email, &credentials.password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            Ok((email, password))
        }
        _ => Err(Error::Validation(
            "Email and password are required".to_string(),
        )),
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
        && !domain.contains('@')
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@missing-local.com"));
        assert!(!is_valid_email("missing-domain@"));
        assert!(!is_valid_email("no-tld@domain"));
        assert!(!is_valid_email("spaces in@local.com"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("dot@.start"));
    }
}
