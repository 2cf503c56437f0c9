//! Query feasibility check.

use super::classifier::Classifier;

/// Message attached to a feasible query
pub const FEASIBLE_MESSAGE: &str = "Query is feasible";

/// Reason attached to a query that names no known collection
pub const NO_KNOWN_TABLE: &str = "Query does not reference any known table.";

/// Outcome of validating a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    /// Success message when valid, error reason otherwise
    pub detail: String,
}

impl Validation {
    pub fn feasible() -> Self {
        Self {
            valid: true,
            detail: FEASIBLE_MESSAGE.to_string(),
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            detail: reason.into(),
        }
    }
}

/// Valid iff the classifier says the query references the collection
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    pub fn validate(&self, query: &str, classifier: &Classifier) -> Validation {
        if classifier.references_collection(query) {
            Validation::feasible()
        } else {
            Validation::rejected(NO_KNOWN_TABLE)
        }
    }
}
