//! Content store access
//!
//! The storefront reads every catalog and site object from a hosted headless
//! CMS bucket. Access goes through the [`ContentStore`] trait so services can
//! be backed by either:
//! - [`CosmicClient`] - the HTTP object API (production)
//! - [`MemoryStore`] - an in-process object list (tests, local development)
//!
//! Stores return raw JSON objects; decoding into typed models is left to the
//! services so the trait stays object safe.

pub mod client;
pub mod memory;

use async_trait::async_trait;
use serde_json::{Map, Value};

pub use client::CosmicClient;
pub use memory::MemoryStore;

/// Error returned by content store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store reported that nothing matches the query
    #[error("No objects found for query")]
    NotFound,

    /// The store answered with a non-success status
    #[error("Content API returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The request could not be sent or the response not read
    #[error("Content API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the expected JSON
    #[error("Failed to decode content API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured endpoint is not a valid URL
    #[error("Invalid content API URL: {0}")]
    InvalidUrl(String),
}

impl StoreError {
    /// Whether this is the store's "resource not found" signal
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}

/// A filtered read against one object type.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectQuery {
    /// Object type slug
    pub object_type: String,
    /// Field filters other than the type (`slug`, `metadata.<field>`)
    pub filters: Map<String, Value>,
    /// Fields to return; empty means the store's defaults
    pub props: Vec<String>,
    /// Reference expansion depth
    pub depth: Option<u8>,
    /// Maximum number of objects
    pub limit: Option<u32>,
}

impl ObjectQuery {
    /// Query all objects of a type
    pub fn new(object_type: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            filters: Map::new(),
            props: Vec::new(),
            depth: None,
            limit: None,
        }
    }

    /// Restrict to the object with this slug
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.filters.insert("slug".to_string(), Value::String(slug.into()));
        self
    }

    /// Restrict on a metafield value
    pub fn metadata(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filters.insert(format!("metadata.{}", field), value.into());
        self
    }

    /// Project the returned fields
    pub fn props(mut self, props: &[&str]) -> Self {
        self.props = props.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Expand references this many levels deep
    pub fn depth(mut self, depth: u8) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Limit the number of returned objects
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The JSON filter document sent as the `query` parameter
    pub fn query_json(&self) -> Value {
        let mut query = self.filters.clone();
        query.insert("type".to_string(), Value::String(self.object_type.clone()));
        Value::Object(query)
    }
}

/// Read access to the content store
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All objects matching the query.
    ///
    /// Stores signal an empty match with [`StoreError::NotFound`].
    async fn find(&self, query: &ObjectQuery) -> Result<Vec<Value>, StoreError>;

    /// The first object matching the query.
    async fn find_one(&self, query: &ObjectQuery) -> Result<Value, StoreError> {
        let query = query.clone().limit(1);
        self.find(&query)
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::NotFound)
    }
}
