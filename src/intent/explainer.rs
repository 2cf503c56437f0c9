//! Query explanation.

use serde::{Deserialize, Serialize};

use super::classifier::Classifier;
use super::translator::Translator;

/// `detected_table` value when no known collection is referenced
pub const UNKNOWN_TABLE_LABEL: &str = "unknown";

/// Breakdown of how a query was interpreted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub original_query: String,
    pub detected_table: String,
    pub translated_query: String,
}

/// Composes classifier and translator output into an [`Explanation`]
#[derive(Debug, Clone)]
pub struct Explainer {
    collection: String,
}

impl Explainer {
    pub fn new(collection: &str) -> Self {
        Self {
            collection: collection.to_string(),
        }
    }

    pub fn explain(
        &self,
        query: &str,
        classifier: &Classifier,
        translator: &Translator,
    ) -> Explanation {
        let references = classifier.references_collection(query);
        let detected_table = if references {
            self.collection.clone()
        } else {
            UNKNOWN_TABLE_LABEL.to_string()
        };

        Explanation {
            original_query: query.to_string(),
            detected_table,
            translated_query: translator.translate(references),
        }
    }
}
