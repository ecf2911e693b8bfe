//! Product model

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::content::{lenient_f64, lenient_i64, ContentObject, ImageRef};

/// Object type slug for products
pub const PRODUCT_TYPE: &str = "produits";

/// Reference from a product to its category.
///
/// Queried with a reference depth of 1 the store inlines the category object;
/// otherwise only its id is present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CategoryRef {
    /// Category expanded one level deep
    Expanded(Box<Category>),
    /// Bare category id
    Id(String),
}

impl CategoryRef {
    /// Referenced category id, if any
    pub fn id(&self) -> Option<&str> {
        let id = match self {
            CategoryRef::Expanded(category) => category.id.as_str(),
            CategoryRef::Id(id) => id.as_str(),
        };
        (!id.is_empty()).then_some(id)
    }

    /// The inlined category, if the reference was expanded
    pub fn expanded(&self) -> Option<&Category> {
        match self {
            CategoryRef::Expanded(category) => Some(category),
            CategoryRef::Id(_) => None,
        }
    }
}

/// Product metafields
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductMetadata {
    /// Display name
    #[serde(rename = "nom", default)]
    pub name: Option<String>,
    /// Short description for cards
    #[serde(rename = "description_courte", default)]
    pub short_description: Option<String>,
    /// Long description (HTML)
    #[serde(rename = "description_detaillee", default)]
    pub long_description: Option<String>,
    /// Price in euros
    #[serde(rename = "prix", default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    /// Compare-at price in euros
    #[serde(rename = "prix_barre", default, deserialize_with = "lenient_f64")]
    pub compare_at_price: Option<f64>,
    /// Units in stock
    #[serde(default, deserialize_with = "lenient_i64")]
    pub stock: Option<i64>,
    /// Primary image
    #[serde(rename = "image_principale", default)]
    pub main_image: Option<ImageRef>,
    /// Additional images
    #[serde(rename = "galerie", default)]
    pub gallery: Option<Vec<ImageRef>>,
    /// Category reference
    #[serde(rename = "categorie", default)]
    pub category: Option<CategoryRef>,
    /// Featured on the home page
    #[serde(rename = "populaire", default)]
    pub popular: Option<bool>,
    /// New arrival
    #[serde(rename = "nouveau", default)]
    pub new: Option<bool>,
    /// On sale
    #[serde(rename = "en_promotion", default)]
    pub on_sale: Option<bool>,
}

/// A catalog product
pub type Product = ContentObject<ProductMetadata>;

impl Product {
    /// Metadata name, falling back to the object title
    pub fn display_name(&self) -> &str {
        self.metadata
            .name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.title)
    }

    /// Whether the popular flag is explicitly set
    pub fn is_popular(&self) -> bool {
        self.metadata.popular == Some(true)
    }

    /// Id of the product's category, if any
    pub fn category_id(&self) -> Option<&str> {
        self.metadata.category.as_ref().and_then(CategoryRef::id)
    }

    /// The product's category when it was inlined by the query
    pub fn category(&self) -> Option<&Category> {
        self.metadata.category.as_ref().and_then(CategoryRef::expanded)
    }

    /// Primary image followed by the gallery images
    pub fn gallery_images(&self) -> Vec<ImageRef> {
        self.metadata
            .main_image
            .iter()
            .chain(self.metadata.gallery.iter().flatten())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(metadata: serde_json::Value) -> Product {
        serde_json::from_value(json!({
            "id": "p1", "slug": "casque", "title": "Casque", "type": PRODUCT_TYPE,
            "metadata": metadata
        }))
        .unwrap()
    }

    #[test]
    fn test_expanded_category_reference() {
        let p = product(json!({
            "categorie": {
                "id": "c1", "slug": "audio", "title": "Audio",
                "metadata": { "nom": "Audio" }
            }
        }));

        assert_eq!(p.category_id(), Some("c1"));
        assert_eq!(p.category().map(|c| c.slug.as_str()), Some("audio"));
    }

    #[test]
    fn test_bare_and_empty_category_reference() {
        let bare = product(json!({ "categorie": "c9" }));
        let empty = product(json!({ "categorie": "" }));
        let none = product(json!({}));

        assert_eq!(bare.category_id(), Some("c9"));
        assert!(bare.category().is_none());
        assert_eq!(empty.category_id(), None);
        assert_eq!(none.category_id(), None);
    }

    #[test]
    fn test_popular_flag_must_be_true() {
        assert!(product(json!({ "populaire": true })).is_popular());
        assert!(!product(json!({ "populaire": false })).is_popular());
        assert!(!product(json!({})).is_popular());
    }

    #[test]
    fn test_gallery_images_order() {
        let p = product(json!({
            "image_principale": { "url": "main", "imgix_url": "main" },
            "galerie": [
                { "url": "g1", "imgix_url": "g1" },
                { "url": "g2", "imgix_url": "g2" }
            ]
        }));

        let urls: Vec<_> = p.gallery_images().into_iter().map(|i| i.url).collect();
        assert_eq!(urls, vec!["main", "g1", "g2"]);
        assert!(product(json!({ "galerie": null })).gallery_images().is_empty());
    }

    #[test]
    fn test_numeric_fields() {
        let p = product(json!({ "nom": "Casque X", "prix": "149", "prix_barre": 199, "stock": 3 }));

        assert_eq!(p.display_name(), "Casque X");
        assert_eq!(p.metadata.price, Some(149.0));
        assert_eq!(p.metadata.compare_at_price, Some(199.0));
        assert_eq!(p.metadata.stock, Some(3));
    }
}
