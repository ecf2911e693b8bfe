//! Services layer - content queries
//!
//! One service per content type. Each service turns a typed request into an
//! [`ObjectQuery`] against the shared [`ContentStore`] and:
//! - decodes the raw objects into typed models
//! - normalizes the store's "not found" signal into an empty list or `None`
//! - applies client-side ordering and filtering

pub mod article;
pub mod banner;
pub mod category;
pub mod markdown;
pub mod product;
pub mod site;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cmp::Ordering;

use crate::cosmic::{ContentStore, ObjectQuery, StoreError};
use crate::models::ContentObject;

pub use article::ArticleService;
pub use banner::BannerService;
pub use category::CategoryService;
pub use markdown::MarkdownRenderer;
pub use product::ProductService;
pub use site::SiteService;

/// Fields requested by list queries
pub const LIST_PROPS: &[&str] = &["id", "slug", "title", "type", "metadata", "created_at"];

/// Error types for content queries
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The store failed for a reason other than "not found"
    #[error("Failed to fetch {what}: {source}")]
    Fetch {
        what: &'static str,
        #[source]
        source: StoreError,
    },

    /// An object did not have the expected shape
    #[error("Failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Run a list query; "not found" yields an empty list.
///
/// Objects that do not decode are logged and left out.
pub(crate) async fn find_all<M>(
    store: &dyn ContentStore,
    query: &ObjectQuery,
    what: &'static str,
) -> Result<Vec<ContentObject<M>>, QueryError>
where
    M: DeserializeOwned + Default,
{
    let objects = match store.find(query).await {
        Ok(objects) => objects,
        Err(e) if e.is_not_found() => return Ok(Vec::new()),
        Err(source) => return Err(QueryError::Fetch { what, source }),
    };

    Ok(objects
        .into_iter()
        .filter_map(|object| {
            let id = object.get("id").and_then(Value::as_str).unwrap_or("?").to_string();
            match decode(object, what) {
                Ok(decoded) => Some(decoded),
                Err(e) => {
                    tracing::warn!(what, id = %id, "Skipping object: {}", e);
                    None
                }
            }
        })
        .collect())
}

/// Run a single-object query, returning the raw object.
pub(crate) async fn find_one_raw(
    store: &dyn ContentStore,
    query: &ObjectQuery,
    what: &'static str,
) -> Result<Option<Value>, QueryError> {
    match store.find_one(query).await {
        Ok(object) => Ok(Some(object)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(source) => Err(QueryError::Fetch { what, source }),
    }
}

/// Run a single-object query; "not found" yields `None`.
pub(crate) async fn find_one<M>(
    store: &dyn ContentStore,
    query: &ObjectQuery,
    what: &'static str,
) -> Result<Option<ContentObject<M>>, QueryError>
where
    M: DeserializeOwned + Default,
{
    find_one_raw(store, query, what)
        .await?
        .map(|object| decode(object, what))
        .transpose()
}

pub(crate) fn decode<M>(object: Value, what: &'static str) -> Result<ContentObject<M>, QueryError>
where
    M: DeserializeOwned + Default,
{
    serde_json::from_value(object).map_err(|source| QueryError::Decode { what, source })
}

/// Stable sort, newest first. Items without a date go last in their
/// original order.
pub(crate) fn sort_newest_first<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> Option<DateTime<Utc>>,
{
    items.sort_by(|a, b| match (key(a), key(b)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sort_newest_first_puts_undated_last() {
        let day = |d: u32| Some(Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap());
        let mut items = vec![("a", None), ("b", day(1)), ("c", None), ("d", day(3))];

        sort_newest_first(&mut items, |(_, date)| *date);

        let order: Vec<&str> = items.iter().map(|(name, _)| *name).collect();
        assert_eq!(order, vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_query_error_messages() {
        let err = QueryError::Fetch {
            what: "products",
            source: StoreError::Status {
                status: 500,
                message: "boom".to_string(),
            },
        };

        assert!(err.to_string().starts_with("Failed to fetch products"));
    }
}
