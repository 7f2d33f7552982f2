//! Error types for the component contract.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Errors raised while constructing contract values.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required argument was missing or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A builder reached `build()` with a field it cannot accept.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Authentication data was rejected by a credentials verifier.
    #[error(transparent)]
    InvalidCredentials(#[from] InvalidCredentials),
}

impl ApiError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::debug!(error = %msg, "rejected invalid argument");
        ApiError::InvalidArgument(msg)
    }

    pub(crate) fn invalid_state(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::debug!(error = %msg, "rejected invalid builder state");
        ApiError::InvalidState(msg)
    }
}

type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Returned by [`CredentialsVerifier::verify`](crate::CredentialsVerifier::verify)
/// when authentication credentials are invalid.
///
/// Both the detail message and the underlying cause are optional.
#[derive(Debug, Default)]
pub struct InvalidCredentials {
    message: Option<String>,
    cause: Option<Cause>,
}

impl InvalidCredentials {
    /// Creates an error with no detail message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an error with the given detail message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            cause: None,
        }
    }

    /// Creates an error with a detail message and the error that caused it.
    pub fn with_cause(
        message: impl Into<String>,
        cause: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            message: Some(message.into()),
            cause: Some(cause.into()),
        }
    }

    /// The detail message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for InvalidCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "invalid credentials: {msg}"),
            None => f.write_str("invalid credentials"),
        }
    }
}

impl StdError for InvalidCredentials {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}
