//! Product presentation: cards, detail view, gallery, stock and badges

use serde::Serialize;

use super::carousel::{Carousel, CarouselView};
use super::format::{format_price, initial};
use super::{category::CategoryLink, product_href};
use crate::models::{ImageRef, Product};

/// Card image size
pub const CARD_IMAGE: (u32, u32) = (600, 600);
/// Gallery main image size
pub const GALLERY_IMAGE: (u32, u32) = (800, 800);
/// Gallery thumbnail size
pub const THUMBNAIL_IMAGE: (u32, u32) = (200, 200);

/// Stock count below which the remaining quantity is shown
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Availability derived from the stock count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    Low { count: i64 },
    InStock,
}

impl StockStatus {
    /// Status for a stock count. An unset count means in stock.
    pub fn from_stock(stock: Option<i64>) -> Self {
        match stock {
            Some(n) if n <= 0 => StockStatus::OutOfStock,
            Some(n) if n < LOW_STOCK_THRESHOLD => StockStatus::Low { count: n },
            _ => StockStatus::InStock,
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, StockStatus::OutOfStock)
    }

    pub fn label(&self) -> String {
        match self {
            StockStatus::OutOfStock => "Rupture de stock".to_string(),
            StockStatus::Low { count } => format!("Plus que {} en stock", count),
            StockStatus::InStock => "En stock".to_string(),
        }
    }
}

/// A product flag badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    /// Style modifier
    pub tone: &'static str,
}

impl Badge {
    pub const NEW: Badge = Badge { label: "Nouveau", tone: "primary" };
    pub const SALE: Badge = Badge { label: "Promo", tone: "warning" };
    pub const POPULAR: Badge = Badge { label: "Populaire", tone: "success" };
}

/// Badges in display order: new, sale, popular
pub fn badges(product: &Product) -> Vec<Badge> {
    let meta = &product.metadata;
    [
        (meta.new, Badge::NEW),
        (meta.on_sale, Badge::SALE),
        (meta.popular, Badge::POPULAR),
    ]
    .into_iter()
    .filter(|(flag, _)| *flag == Some(true))
    .map(|(_, badge)| badge)
    .collect()
}

/// Formatted price, hidden when unset or zero
pub fn display_price(product: &Product) -> Option<String> {
    product
        .metadata
        .price
        .filter(|p| *p != 0.0)
        .map(format_price)
}

/// Formatted compare-at price, only when it exceeds the price
pub fn display_compare_at_price(product: &Product) -> Option<String> {
    let price = product.metadata.price.unwrap_or(0.0);
    product
        .metadata
        .compare_at_price
        .filter(|c| *c > price)
        .map(format_price)
}

/// Product card used in grids
#[derive(Debug, Clone, Serialize)]
pub struct ProductCard {
    pub id: String,
    pub href: String,
    pub name: String,
    pub initial: String,
    pub short_description: Option<String>,
    pub category_name: Option<String>,
    pub image: Option<String>,
    pub price: Option<String>,
    pub compare_at_price: Option<String>,
    pub badges: Vec<Badge>,
    pub stock: StockStatus,
    pub stock_label: String,
    pub available: bool,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        let name = product.display_name().to_string();
        let stock = StockStatus::from_stock(product.metadata.stock);
        let (width, height) = CARD_IMAGE;

        Self {
            id: product.id.clone(),
            href: product_href(&product.slug),
            initial: initial(&name),
            short_description: product.metadata.short_description.clone(),
            category_name: product.category().map(|c| c.display_name().to_string()),
            image: product.metadata.main_image.as_ref().map(|i| i.sized(width, height)),
            price: display_price(product),
            compare_at_price: display_compare_at_price(product),
            badges: badges(product),
            stock,
            stock_label: stock.label(),
            available: stock.is_available(),
            name,
        }
    }

    pub fn list(products: &[Product]) -> Vec<Self> {
        products.iter().map(Self::from_product).collect()
    }
}

/// One image of the product gallery
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GalleryImage {
    pub large: String,
    pub thumbnail: String,
    pub alt: String,
    pub thumbnail_alt: String,
    /// Link selecting this image without script
    pub href: String,
    pub active: bool,
}

/// Product image gallery
#[derive(Debug, Clone, Serialize)]
pub struct Gallery {
    pub images: Vec<GalleryImage>,
    pub current: Option<GalleryImage>,
    pub carousel: CarouselView,
    /// Placeholder letter when there is no image
    pub initial: String,
}

impl Gallery {
    /// Gallery over `images`, showing the requested image (wrapped into range)
    pub fn new(images: &[ImageRef], product_name: &str, page_href: &str, requested: Option<i64>) -> Self {
        let carousel = Carousel::at(images.len(), requested);
        let (lw, lh) = GALLERY_IMAGE;
        let (tw, th) = THUMBNAIL_IMAGE;

        let images: Vec<GalleryImage> = images
            .iter()
            .enumerate()
            .map(|(i, image)| GalleryImage {
                large: image.sized(lw, lh),
                thumbnail: image.sized(tw, th),
                alt: format!("{} - Image {}", product_name, i + 1),
                thumbnail_alt: format!("{} - Miniature {}", product_name, i + 1),
                href: format!("{}?image={}", page_href, i),
                active: i == carousel.index(),
            })
            .collect();

        Self {
            current: images.get(carousel.index()).cloned(),
            images,
            carousel: carousel.view(None),
            initial: initial(product_name),
        }
    }
}

/// Product page view
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    pub card: ProductCard,
    /// Long description, HTML as authored
    pub long_description: Option<String>,
    pub category: Option<CategoryLink>,
    pub gallery: Gallery,
}

impl ProductDetail {
    pub fn new(product: &Product, requested_image: Option<i64>) -> Self {
        let card = ProductCard::from_product(product);
        let gallery = Gallery::new(
            &product.gallery_images(),
            &card.name,
            &card.href,
            requested_image,
        );

        Self {
            long_description: product
                .metadata
                .long_description
                .clone()
                .filter(|d| !d.trim().is_empty()),
            category: product.category().map(CategoryLink::from_category),
            gallery,
            card,
        }
    }
}
