use api::ApiError;
use thiserror::Error;

use crate::upload::ValidationError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Api(e) if e.is_cancelled())
    }

    /// Message for a toast or banner, falling back to `fallback` when the
    /// server supplied none.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Api(e) => e.user_message(fallback),
            Error::Validation(e) => e.to_string(),
        }
    }
}

/// Discard the outcome of an operation whose failure must not affect the
/// caller, logging it so the discard stays visible.
pub fn best_effort<T>(operation: &str, result: Result<T, ApiError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(operation, "best-effort call failed: {e}");
            None
        }
    }
}
