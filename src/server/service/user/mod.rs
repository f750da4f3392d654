//! User service layer.
//!
//! Identity creation and verification. Credentials are stored as a single
//! `salt.hash` field: a random salt and a slow scrypt-derived key, both
//! base64 encoded. No password material ever leaves this module.

#[cfg(test)]
mod tests;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::RngCore;
use scrypt::{scrypt, Params};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::user::UserDto,
    server::{data::user::UserRepository, error::Error},
};

const SALT_LEN: usize = 16;
const DERIVED_KEY_LEN: usize = 64;

// Matches the common interactive-login cost: N = 2^14, r = 8, p = 1.
const SCRYPT_LOG_N: u8 = 14;
const SCRYPT_R: u32 = 8;
const SCRYPT_P: u32 = 1;

/// Service for user registration and credential verification.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user with a freshly salted credential.
    ///
    /// Uniqueness is enforced by attempting the insert and translating
    /// the constraint violation, not by a racy pre-check.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Created user, credential stripped
    /// - `Err(Error::Conflict)` - Email already registered
    pub async fn create_user(&self, email: &str, password: &str) -> Result<UserDto, Error> {
        let mut salt = [0u8; SALT_LEN];
        rand::rng().fill_bytes(&mut salt);

        let stored = encode_credential(&salt, &derive_key(password, &salt)?);

        let user = match UserRepository::new(self.db).create(email, &stored).await {
            Ok(user) => user,
            Err(err) => {
                return match err.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => {
                        Err(Error::Conflict("User already exists".to_string()))
                    }
                    _ => Err(err.into()),
                };
            }
        };

        Ok(UserDto {
            id: user.id,
            email: user.email,
        })
    }

    /// Verifies an email/password pair.
    ///
    /// An unknown email and a wrong password are both `Ok(None)`; neither
    /// case carries a distinguishing message.
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserDto>, Error> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Ok(None);
        };

        let Some((salt, expected)) = decode_credential(&user.password) else {
            tracing::warn!("Malformed stored credential for user ID {}", user.id);
            return Ok(None);
        };

        if derive_key(password, &salt)? != expected {
            return Ok(None);
        }

        Ok(Some(UserDto {
            id: user.id,
            email: user.email,
        }))
    }

    /// Retrieves a user by id.
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let maybe_user = UserRepository::new(self.db).get_by_id(user_id).await?;

        Ok(maybe_user.map(|user| UserDto {
            id: user.id,
            email: user.email,
        }))
    }
}

fn derive_key(password: &str, salt: &[u8]) -> Result<Vec<u8>, Error> {
    let params = Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, DERIVED_KEY_LEN)
        .map_err(|err| Error::InternalError(format!("Invalid scrypt parameters: {}", err)))?;

    let mut derived = vec![0u8; DERIVED_KEY_LEN];
    scrypt(password.as_bytes(), salt, &params, &mut derived)
        .map_err(|err| Error::InternalError(format!("Failed to derive credential: {}", err)))?;

    Ok(derived)
}

fn encode_credential(salt: &[u8], derived: &[u8]) -> String {
    format!("{}.{}", BASE64.encode(salt), BASE64.encode(derived))
}

fn decode_credential(stored: &str) -> Option<(Vec<u8>, Vec<u8>)> {
    let (salt, derived) = stored.split_once('.')?;

    Some((BASE64.decode(salt).ok()?, BASE64.decode(derived).ok()?))
}
