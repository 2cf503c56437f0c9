//! # Auth Errors
//!
//! Error types for the access guard.

use thiserror::Error;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authorization errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Credential absent or not equal to the shared secret.
    /// Deliberately one variant so callers cannot tell which.
    #[error("Unauthorized")]
    Unauthorized,

    /// A guard cannot be built around an empty secret
    #[error("Shared secret must not be empty")]
    EmptySecret,
}

impl AuthError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::Unauthorized => 401,
            AuthError::EmptySecret => 500,
        }
    }
}
