//! Error types for the Debita server application.
//!
//! Domain errors are tagged variants carrying a single human-readable
//! message; the API layer maps each variant to an HTTP response through
//! `IntoResponse`. Raw storage-engine error text never reaches a client:
//! unexpected failures are logged and collapsed into a generic 500 body.

pub mod auth;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::auth::AuthError};

/// Main error type for the Debita server application.
///
/// Cache failures never appear here; the cache layer swallows and logs
/// them so a backend outage degrades reads to storage instead of failing
/// the request.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid input field; the message names the first
    /// violated rule.
    #[error("{0}")]
    Validation(String),
    /// Debt absent, owned by another user, or blocked by the terminal
    /// state. The cases are indistinguishable on purpose.
    #[error("Debt not found")]
    NotFoundOrForbidden,
    /// Storage uniqueness violation translated into a domain conflict.
    #[error("{0}")]
    Conflict(String),
    /// Authentication error (session, credential validation).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Internal error indicating a bug in Debita's code.
    #[error("Internal error: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis error raised while wiring the session store or cache pool.
    #[error(transparent)]
    RedisError(#[from] fred::error::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto { error: message }),
            )
                .into_response(),
            Self::NotFoundOrForbidden => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Debt not found".to_string(),
                }),
            )
                .into_response(),
            Self::Conflict(message) => (
                StatusCode::CONFLICT,
                Json(ErrorDto { error: message }),
            )
                .into_response(),
            Self::AuthError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error for debugging but returns a generic message to the
/// client to avoid exposing internal details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
