//! Base content object shared by every content type
//!
//! Objects are read verbatim from the content store. Every type carries the
//! same envelope (id, slug, title, type, timestamps) and a type-specific
//! metadata record holding its metafields.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A content object with its type-specific metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(
    serialize = "M: Serialize",
    deserialize = "M: Deserialize<'de> + Default"
))]
pub struct ContentObject<M> {
    /// Store identifier
    pub id: String,
    /// URL-friendly slug
    pub slug: String,
    /// Object title as entered in the store
    #[serde(default)]
    pub title: String,
    /// Optional rich content body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Type-specific metafields
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: M,
    /// Object type slug (e.g. `produits`)
    #[serde(rename = "type", default)]
    pub object_type: String,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last modification timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

/// An image metafield value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageRef {
    /// Original file URL
    #[serde(default)]
    pub url: String,
    /// Image-CDN URL accepting resize parameters
    #[serde(default)]
    pub imgix_url: String,
}

impl ImageRef {
    /// CDN URL cropped to `width`x`height`, auto format and compression.
    pub fn sized(&self, width: u32, height: u32) -> String {
        let base = if self.imgix_url.is_empty() {
            &self.url
        } else {
            &self.imgix_url
        };
        format!("{}?w={}&h={}&fit=crop&auto=format,compress", base, width, height)
    }
}

/// Map JSON `null` to the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept a number, a numeric string, an empty string or null.
///
/// Unset number metafields come back as `""` from the store. Any other
/// value (free text, booleans) is treated as unset.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => Ok(s.trim().replace(',', ".").parse::<f64>().ok()),
        Some(Raw::Other(_)) | None => Ok(None),
    }
}

/// Integer variant of [`lenient_f64`].
pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_f64(deserializer)?.map(|n| n.trunc() as i64))
}

/// Parse a date metafield, either a bare date (`2024-03-01`) or RFC 3339.
pub fn parse_store_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
