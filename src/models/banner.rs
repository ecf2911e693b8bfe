//! Banner model

use serde::{Deserialize, Serialize};

use super::content::{ContentObject, ImageRef};

/// Object type slug for banners
pub const BANNER_TYPE: &str = "bannieres";

/// Banner metafields
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BannerMetadata {
    /// Headline
    #[serde(rename = "titre", default)]
    pub title: Option<String>,
    /// Sub-headline
    #[serde(rename = "sous_titre", default)]
    pub subtitle: Option<String>,
    /// Background image
    #[serde(rename = "image_fond", default)]
    pub background_image: Option<ImageRef>,
    /// Call-to-action label
    #[serde(rename = "texte_bouton", default)]
    pub button_label: Option<String>,
    /// Call-to-action link
    #[serde(rename = "lien_bouton", default)]
    pub button_link: Option<String>,
    /// Whether the banner is shown
    #[serde(rename = "actif", default)]
    pub active: Option<bool>,
}

/// A hero banner
pub type Banner = ContentObject<BannerMetadata>;

impl Banner {
    /// Headline, falling back to the object title
    pub fn headline(&self) -> &str {
        self.metadata
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(&self.title)
    }

    /// Call to action, only when both label and link are set
    pub fn call_to_action(&self) -> Option<(&str, &str)> {
        let label = self.metadata.button_label.as_deref().filter(|s| !s.is_empty())?;
        let link = self.metadata.button_link.as_deref().filter(|s| !s.is_empty())?;
        Some((label, link))
    }
}
