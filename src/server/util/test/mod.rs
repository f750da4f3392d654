//! In-crate test doubles.

pub mod cache;

/// Bridges the crate's [`crate::server::error::Error`] into the test
/// harness's `TestError` so tests can propagate service errors with `?`.
/// The impl lives here because the orphan rule forbids test-utils (which
/// cannot depend on this crate) from naming this crate's error type.
impl From<crate::server::error::Error> for debita_test_utils::TestError {
    fn from(err: crate::server::error::Error) -> Self {
        debita_test_utils::TestError::Other(Box::new(err))
    }
}
