//! Hero banner presentation

use serde::Serialize;

use super::carousel::{Carousel, CarouselView, HERO_AUTOPLAY_MS};
use crate::models::Banner;

/// Hero background image size
pub const HERO_IMAGE: (u32, u32) = (1920, 600);

/// Banner call to action
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

/// One hero slide
#[derive(Debug, Clone, Serialize)]
pub struct HeroSlide {
    /// Headline, only when set on the banner itself
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image: Option<String>,
    pub alt: String,
    pub cta: Option<CallToAction>,
    /// Link selecting this slide without script
    pub href: String,
    pub active: bool,
}

/// Hero banner carousel
#[derive(Debug, Clone, Serialize)]
pub struct HeroBanner {
    pub slides: Vec<HeroSlide>,
    pub carousel: CarouselView,
}

impl HeroBanner {
    /// Hero over the active banners; `None` when there is nothing to show
    pub fn new(banners: &[Banner], requested_slide: Option<i64>) -> Option<Self> {
        if banners.is_empty() {
            return None;
        }

        let carousel = Carousel::at(banners.len(), requested_slide);
        let (width, height) = HERO_IMAGE;
        let slides = banners
            .iter()
            .enumerate()
            .map(|(i, banner)| HeroSlide {
                title: banner.metadata.title.clone().filter(|t| !t.is_empty()),
                subtitle: banner.metadata.subtitle.clone().filter(|s| !s.is_empty()),
                image: banner
                    .metadata
                    .background_image
                    .as_ref()
                    .map(|img| img.sized(width, height)),
                alt: banner.headline().to_string(),
                cta: banner.call_to_action().map(|(label, href)| CallToAction {
                    label: label.to_string(),
                    href: href.to_string(),
                }),
                href: format!("/?slide={}", i),
                active: i == carousel.index(),
            })
            .collect();

        Some(Self {
            slides,
            carousel: carousel.view(Some(HERO_AUTOPLAY_MS)),
        })
    }
}
