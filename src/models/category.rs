//! Category model
//!
//! Categories group products and drive the header/footer navigation.

use serde::{Deserialize, Serialize};

use super::content::{ContentObject, ImageRef};

/// Object type slug for categories
pub const CATEGORY_TYPE: &str = "categories";

/// Category metafields
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryMetadata {
    /// Display name
    #[serde(rename = "nom", default)]
    pub name: Option<String>,
    /// Category description
    #[serde(default)]
    pub description: Option<String>,
    /// Banner image shown on the category page
    #[serde(rename = "image_banniere", default)]
    pub banner_image: Option<ImageRef>,
}

/// A product category
pub type Category = ContentObject<CategoryMetadata>;

impl Category {
    /// Metadata name, falling back to the object title
    pub fn display_name(&self) -> &str {
        self.metadata
            .name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_name_fallback() {
        let named: Category = serde_json::from_value(json!({
            "id": "c1", "slug": "audio", "title": "audio",
            "metadata": { "nom": "Audio & Son" }
        }))
        .unwrap();
        let unnamed: Category = serde_json::from_value(json!({
            "id": "c2", "slug": "photo", "title": "Photo", "metadata": { "nom": "" }
        }))
        .unwrap();

        assert_eq!(named.display_name(), "Audio & Son");
        assert_eq!(unnamed.display_name(), "Photo");
    }

    #[test]
    fn test_banner_image() {
        let category: Category = serde_json::from_value(json!({
            "id": "c1", "slug": "audio", "title": "Audio",
            "metadata": {
                "image_banniere": { "url": "u", "imgix_url": "https://imgix.test/a.png" }
            }
        }))
        .unwrap();

        let banner = category.metadata.banner_image.unwrap();
        assert_eq!(banner.imgix_url, "https://imgix.test/a.png");
    }
}
