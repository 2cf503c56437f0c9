//! # Intent Classification
//!
//! Decides whether a natural-language query references the known
//! collection and turns that single decision into the canned responses the
//! gateway returns.
//!
//! Everything here is a pure function of the input string. There is no
//! tokenization and no inference beyond one substring check:
//!
//! ```text
//! query ──► Classifier ──► Translator ──► "SELECT * FROM sales"
//!                     ├──► Explainer  ──► Explanation
//!                     └──► Validator  ──► Validation
//! ```

pub mod classifier;
pub mod engine;
pub mod explainer;
pub mod translator;
pub mod validator;

pub use classifier::Classifier;
pub use engine::{QueryEngine, QueryOutcome};
pub use explainer::{Explainer, Explanation, UNKNOWN_TABLE_LABEL};
pub use translator::{Translator, UNKNOWN_TABLE};
pub use validator::{Validation, Validator, FEASIBLE_MESSAGE, NO_KNOWN_TABLE};
