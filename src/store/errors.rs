//! # Store Errors

use thiserror::Error;

/// Result type for store construction
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while building a record store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Collection name must be non-empty
    #[error("Collection name must not be empty")]
    EmptyCollectionName,

    /// Record ids are caller-assigned and must be unique
    #[error("Duplicate record id: {0}")]
    DuplicateId(i64),
}
