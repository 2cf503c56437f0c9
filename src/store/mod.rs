//! # Record Store
//!
//! The fixed, read-only record collection the gateway can reference.
//!
//! Exactly one collection exists. It is seeded when the process starts and
//! handed to the rest of the system as an immutable value; nothing in the
//! crate writes to it afterwards.

mod errors;
mod record;

pub use errors::{StoreError, StoreResult};
pub use record::{Collection, Record, RecordStore, DEFAULT_COLLECTION};
