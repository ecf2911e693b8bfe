//! Category presentation

use serde::Serialize;

use super::category_href;
use super::format::initial;
use crate::models::Category;

/// Category grid tile image size
pub const TILE_IMAGE: (u32, u32) = (600, 300);
/// Category page header image size
pub const HEADER_IMAGE: (u32, u32) = (1920, 400);

/// Navigation link to a category
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryLink {
    pub name: String,
    pub href: String,
}

impl CategoryLink {
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.display_name().to_string(),
            href: category_href(&category.slug),
        }
    }
}

/// Tile in the home page category grid
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTile {
    pub name: String,
    pub href: String,
    pub initial: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl CategoryTile {
    pub fn from_category(category: &Category) -> Self {
        let name = category.display_name().to_string();
        let (width, height) = TILE_IMAGE;
        Self {
            href: category_href(&category.slug),
            initial: initial(&name),
            description: category.metadata.description.clone(),
            image: category
                .metadata
                .banner_image
                .as_ref()
                .map(|i| i.sized(width, height)),
            name,
        }
    }
}

/// Category page header
#[derive(Debug, Clone, Serialize)]
pub struct CategoryHeader {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl CategoryHeader {
    pub fn from_category(category: &Category) -> Self {
        let (width, height) = HEADER_IMAGE;
        Self {
            name: category.display_name().to_string(),
            description: category.metadata.description.clone(),
            image: category
                .metadata
                .banner_image
                .as_ref()
                .map(|i| i.sized(width, height)),
        }
    }
}
