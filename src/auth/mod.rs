//! # Access Guard
//!
//! Shared-secret authorization applied before any request handler runs.
//!
//! The secret is configuration handed to [`AccessGuard::new`]; nothing here
//! reads process-wide state.

pub mod errors;
pub mod guard;

pub use errors::{AuthError, AuthResult};
pub use guard::{AccessGuard, SharedSecret};
