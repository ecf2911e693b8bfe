//! Blog article model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::content::{parse_store_date, ContentObject, ImageRef};

/// Object type slug for articles
pub const ARTICLE_TYPE: &str = "articles";

/// Article metafields
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArticleMetadata {
    /// Headline
    #[serde(rename = "titre", default)]
    pub title: Option<String>,
    /// Summary for listings
    #[serde(rename = "resume", default)]
    pub summary: Option<String>,
    /// Body (Markdown or HTML)
    #[serde(rename = "contenu", default)]
    pub body: Option<String>,
    /// Cover image
    #[serde(rename = "image_couverture", default)]
    pub cover_image: Option<ImageRef>,
    /// Publish date as stored (date or date-time)
    #[serde(rename = "date_publication", default)]
    pub publish_date: Option<String>,
}

/// A blog article
pub type Article = ContentObject<ArticleMetadata>;

impl Article {
    /// Headline, falling back to the object title
    pub fn headline(&self) -> &str {
        self.metadata
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(&self.title)
    }

    /// Parsed publish date
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.metadata.publish_date.as_deref().and_then(parse_store_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_published_at_parses_bare_date() {
        let article: Article = serde_json::from_value(json!({
            "id": "a1", "slug": "guide", "title": "Guide",
            "metadata": { "titre": "Guide d'achat", "date_publication": "2024-02-10" }
        }))
        .unwrap();

        assert_eq!(article.headline(), "Guide d'achat");
        assert_eq!(
            article.published_at().map(|d| d.format("%Y-%m-%d").to_string()),
            Some("2024-02-10".to_string())
        );
    }

    #[test]
    fn test_missing_publish_date() {
        let article: Article = serde_json::from_value(json!({
            "id": "a2", "slug": "brouillon", "title": "Brouillon", "metadata": {}
        }))
        .unwrap();

        assert!(article.published_at().is_none());
        assert_eq!(article.headline(), "Brouillon");
    }
}
