//! # Query Engine
//!
//! Binds the injected record store to the classifier pipeline and exposes
//! the three request operations. Shared by the HTTP handlers and the
//! one-shot CLI commands.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::store::{Record, RecordStore, StoreResult};

use super::classifier::Classifier;
use super::explainer::{Explainer, Explanation};
use super::translator::Translator;
use super::validator::{Validation, Validator};

/// Result of the `query` operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOutcome {
    pub original_query: String,
    pub translated_query: String,
    pub result: Vec<Record>,
}

/// Stateless façade over the store and the classifier
#[derive(Debug, Clone)]
pub struct QueryEngine {
    store: Arc<RecordStore>,
    classifier: Classifier,
    translator: Translator,
    explainer: Explainer,
    validator: Validator,
}

impl QueryEngine {
    /// Build an engine whose keyword is the store's collection name
    pub fn new(store: Arc<RecordStore>) -> Self {
        let name = store.collection_name().to_string();
        Self {
            classifier: Classifier::new(&name),
            translator: Translator::new(&name),
            explainer: Explainer::new(&name),
            validator: Validator,
            store,
        }
    }

    /// Engine over the seeded sales store
    pub fn seeded() -> StoreResult<Self> {
        Ok(Self::new(Arc::new(RecordStore::seeded()?)))
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Translate the query and return the records it selects
    pub fn query(&self, query: &str) -> QueryOutcome {
        let translated_query = self.translator.translate(self.classifier.references_collection(query));

        // Filtering runs the substring check a second time instead of
        // reading the translation.
        let result = if self.classifier.references_collection(query) {
            self.store.records().to_vec()
        } else {
            Vec::new()
        };

        debug!(
            translated = %translated_query,
            rows = result.len(),
            "classified query"
        );

        QueryOutcome {
            original_query: query.to_string(),
            translated_query,
            result,
        }
    }

    pub fn explain(&self, query: &str) -> Explanation {
        let explanation = self.explainer.explain(query, &self.classifier, &self.translator);
        debug!(detected_table = %explanation.detected_table, "explained query");
        explanation
    }

    pub fn validate(&self, query: &str) -> Validation {
        let validation = self.validator.validate(query, &self.classifier);
        debug!(valid = validation.valid, "validated query");
        validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Collection;

    #[test]
    fn test_query_returns_all_records_for_sales() {
        let engine = QueryEngine::seeded().unwrap();
        let outcome = engine.query("Show all sales records");
        assert_eq!(outcome.original_query, "Show all sales records");
        assert_eq!(outcome.translated_query, "SELECT * FROM sales");
        assert_eq!(outcome.result.len(), 3);
        assert_eq!(outcome.result, engine.store().records());
    }

    #[test]
    fn test_query_unknown_returns_nothing() {
        let outcome = QueryEngine::seeded().unwrap().query("Show employees");
        assert_eq!(outcome.translated_query, "SELECT * FROM unknown_table");
        assert!(outcome.result.is_empty());
    }

    #[test]
    fn test_engine_follows_store_collection_name() {
        let collection = Collection::new("orders", vec![Record::new(9, "Chair", 45u64)]).unwrap();
        let engine = QueryEngine::new(Arc::new(RecordStore::new(collection)));

        assert!(engine.query("sales").result.is_empty());
        let outcome = engine.query("open ORDERS");
        assert_eq!(outcome.translated_query, "SELECT * FROM orders");
        assert_eq!(outcome.result.len(), 1);
        assert_eq!(engine.explain("orders").detected_table, "orders");
    }

    #[test]
    fn test_operations_are_repeatable() {
        let engine = QueryEngine::seeded().unwrap();
        let first = serde_json::to_vec(&engine.query("sales")).unwrap();
        let second = serde_json::to_vec(&engine.query("sales")).unwrap();
        assert_eq!(first, second);
        assert_eq!(engine.explain("sales data"), engine.explain("sales data"));
        assert_eq!(engine.validate("inventory"), engine.validate("inventory"));
    }
}
