//! HTTP client for the Cosmic object API
//!
//! Issues `GET {api_url}/buckets/{bucket}/objects` with the filter document,
//! projection and reference depth as query parameters. A 404 answer is the
//! API's way of saying "no objects match" and maps to [`StoreError::NotFound`].

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use super::{ContentStore, ObjectQuery, StoreError};
use crate::config::CosmicConfig;

/// Object list response body
#[derive(Debug, Deserialize)]
struct ObjectsPage {
    #[serde(default)]
    objects: Vec<Value>,
    #[serde(default)]
    total: Option<u64>,
}

/// Error response body
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Configured handle to a content bucket
pub struct CosmicClient {
    http: reqwest::Client,
    api_url: String,
    bucket_slug: String,
    read_key: String,
    write_key: Option<String>,
}

impl std::fmt::Debug for CosmicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmicClient")
            .field("api_url", &self.api_url)
            .field("bucket_slug", &self.bucket_slug)
            .field("has_write_key", &self.write_key.is_some())
            .finish()
    }
}

impl CosmicClient {
    /// Build a client from configuration
    pub fn new(config: &CosmicConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("techstore/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            bucket_slug: config.bucket_slug.clone(),
            read_key: config.read_key.clone(),
            write_key: config.write_key.clone(),
        })
    }

    /// Bucket this client reads from
    pub fn bucket_slug(&self) -> &str {
        &self.bucket_slug
    }

    /// Whether write credentials were supplied
    pub fn has_write_key(&self) -> bool {
        self.write_key.is_some()
    }

    /// Full request URL for a query
    fn objects_url(&self, query: &ObjectQuery) -> Result<Url, StoreError> {
        let base = format!("{}/buckets/{}/objects", self.api_url, self.bucket_slug);
        let mut url = Url::parse(&base).map_err(|e| StoreError::InvalidUrl(format!("{}: {}", base, e)))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("read_key", &self.read_key);
            pairs.append_pair("query", &query.query_json().to_string());
            if !query.props.is_empty() {
                pairs.append_pair("props", &query.props.join(","));
            }
            if let Some(depth) = query.depth {
                pairs.append_pair("depth", &depth.to_string());
            }
            if let Some(limit) = query.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
        }

        Ok(url)
    }
}

#[async_trait]
impl ContentStore for CosmicClient {
    async fn find(&self, query: &ObjectQuery) -> Result<Vec<Value>, StoreError> {
        let url = self.objects_url(query)?;
        tracing::debug!(object_type = %query.object_type, "querying content API");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound);
        }

        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(StoreError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let page: ObjectsPage = serde_json::from_str(&body)?;
        tracing::debug!(
            object_type = %query.object_type,
            returned = page.objects.len(),
            total = ?page.total,
            "content API answered"
        );

        Ok(page.objects)
    }
}
