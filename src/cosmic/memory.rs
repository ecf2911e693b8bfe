//! In-process content store
//!
//! Holds a fixed list of JSON objects and answers queries the way the hosted
//! API does: type and field filters, references matched by id, and
//! [`StoreError::NotFound`] when nothing matches. Failures can be injected per
//! object type to exercise error paths.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{ContentStore, ObjectQuery, StoreError};

/// Content store backed by a list of objects
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Vec<Value>,
    failures: HashMap<String, u16>,
    calls: AtomicUsize,
}

impl MemoryStore {
    /// Create a store holding these objects
    pub fn new(objects: Vec<Value>) -> Self {
        Self {
            objects,
            failures: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Answer every query for `object_type` with this HTTP status
    pub fn with_failure(mut self, object_type: &str, status: u16) -> Self {
        self.failures.insert(object_type.to_string(), status);
        self
    }

    /// Number of queries answered so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    fn matches(object: &Value, query: &ObjectQuery) -> bool {
        if object.get("type").and_then(Value::as_str) != Some(query.object_type.as_str()) {
            return false;
        }

        query.filters.iter().all(|(field, expected)| {
            let actual = field
                .split('.')
                .try_fold(object, |value, key| value.get(key));
            match actual {
                Some(actual) if actual == expected => true,
                // A reference expanded into an object matches on its id
                Some(Value::Object(reference)) => reference.get("id") == Some(expected),
                _ => false,
            }
        })
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn find(&self, query: &ObjectQuery) -> Result<Vec<Value>, StoreError> {
        self.calls.fetch_add(1, Ordering::Relaxed);

        if let Some(&status) = self.failures.get(&query.object_type) {
            if status == 404 {
                return Err(StoreError::NotFound);
            }
            return Err(StoreError::Status {
                status,
                message: format!("injected failure for {}", query.object_type),
            });
        }

        let limit = query.limit.map(|l| l as usize).unwrap_or(usize::MAX);
        let found: Vec<Value> = self
            .objects
            .iter()
            .filter(|object| Self::matches(object, query))
            .take(limit)
            .cloned()
            .collect();

        if found.is_empty() {
            return Err(StoreError::NotFound);
        }
        Ok(found)
    }
}
