//! Keyword classifier.

use crate::store::DEFAULT_COLLECTION;

/// Case-insensitive substring predicate over a single keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    /// Stored lowercased
    keyword: String,
}

impl Classifier {
    /// An empty keyword yields a classifier that matches nothing
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
        }
    }

    /// Returns true when `query` contains the keyword in any letter casing
    pub fn references_collection(&self, query: &str) -> bool {
        if query.is_empty() || self.keyword.is_empty() {
            return false;
        }
        query.to_lowercase().contains(&self.keyword)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_COLLECTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_any_casing() {
        let classifier = Classifier::default();
        assert!(classifier.references_collection("sales"));
        assert!(classifier.references_collection("SALES"));
        assert!(classifier.references_collection("Sales report"));
        assert!(classifier.references_collection("Show all sAlEs records"));
    }

    #[test]
    fn test_containment_not_tokens() {
        let classifier = Classifier::default();
        assert!(classifier.references_collection("wholesalesman"));
        assert!(!classifier.references_collection("sale"));
        assert!(!classifier.references_collection("s a l e s"));
    }

    #[test]
    fn test_empty_query_is_false() {
        assert!(!Classifier::default().references_collection(""));
    }

    #[test]
    fn test_keyword_is_lowercased() {
        let classifier = Classifier::new("Orders");
        assert!(classifier.references_collection("ORDERS today"));
        assert!(classifier.references_collection("orders"));
    }

    #[test]
    fn test_empty_keyword_matches_nothing() {
        let classifier = Classifier::new("");
        assert!(!classifier.references_collection("Show all sales records"));
        assert!(!classifier.references_collection(" "));
        assert!(!classifier.references_collection(""));
    }
}
