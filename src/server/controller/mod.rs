//! HTTP controller endpoints for the Debita web API.
//!
//! Controllers translate requests to and from the domain services and
//! nothing more: session identity, body extraction, status codes. Business
//! rules live in the service layer.

pub mod auth;
pub mod debt;
pub mod util;
