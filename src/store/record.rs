//! Records and the single named collection that holds them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::errors::{StoreError, StoreResult};

/// Name of the only collection the gateway knows about
pub const DEFAULT_COLLECTION: &str = "sales";

/// A single immutable record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub item: String,
    /// Kept as a JSON number so whole prices serialize without a fraction
    pub price: Number,
}

impl Record {
    pub fn new(id: i64, item: impl Into<String>, price: impl Into<Number>) -> Self {
        Self {
            id,
            item: item.into(),
            price: price.into(),
        }
    }
}

/// A named, ordered sequence of records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection {
    name: String,
    records: Vec<Record>,
}

impl Collection {
    /// Build a collection, rejecting an empty name or repeated ids
    pub fn new(name: impl Into<String>, records: Vec<Record>) -> StoreResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StoreError::EmptyCollectionName);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(StoreError::DuplicateId(record.id));
            }
        }

        Ok(Self { name, records })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read-only store holding exactly one collection
///
/// There is no table registry and no mutation API. Share it behind an
/// `Arc` once built.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore {
    collection: Collection,
}

impl RecordStore {
    pub fn new(collection: Collection) -> Self {
        Self { collection }
    }

    /// The store every server starts with: three sales records
    pub fn seeded() -> StoreResult<Self> {
        let records = vec![
            Record::new(1, "Laptop", 1500u64),
            Record::new(2, "Phone", 800u64),
            Record::new(3, "Tablet", 600u64),
        ];

        Ok(Self::new(Collection::new(DEFAULT_COLLECTION, records)?))
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }

    /// All records of the collection, in seed order
    pub fn records(&self) -> &[Record] {
        self.collection.records()
    }
}
