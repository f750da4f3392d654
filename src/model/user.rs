use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user with all credential material stripped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
}

/// Request body shared by registration and login.
#[derive(Deserialize, ToSchema)]
pub struct CredentialsDto {
    pub email: Option<String>,
    pub password: Option<String>,
}
