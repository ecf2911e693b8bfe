//! View components
//!
//! Typed view models handed to the templates, and the small pieces of UI
//! state (carousel position, mobile menu) the pages carry through query
//! parameters.

pub mod article;
pub mod banner;
pub mod carousel;
pub mod category;
pub mod format;
pub mod menu;
pub mod product;

pub use article::{ArticleCard, ArticleView};
pub use banner::HeroBanner;
pub use carousel::{Carousel, CarouselView, HERO_AUTOPLAY_MS};
pub use category::{CategoryHeader, CategoryLink, CategoryTile};
pub use format::{format_date, format_price};
pub use menu::{MobileMenu, MobileMenuView};
pub use product::{ProductCard, ProductDetail, StockStatus};

/// Product page link
pub fn product_href(slug: &str) -> String {
    format!("/produits/{}", urlencoding::encode(slug))
}

/// Category page link
pub fn category_href(slug: &str) -> String {
    format!("/categories/{}", urlencoding::encode(slug))
}

/// Article page link
pub fn article_href(slug: &str) -> String {
    format!("/blog/{}", urlencoding::encode(slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hrefs_encode_slugs() {
        assert_eq!(product_href("casque-pro"), "/produits/casque-pro");
        assert_eq!(category_href("son audio"), "/categories/son%20audio");
        assert_eq!(article_href("guide"), "/blog/guide");
    }
}
