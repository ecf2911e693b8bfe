//! Blog article presentation

use serde::Serialize;

use super::article_href;
use super::format::format_date;
use crate::models::Article;
use crate::services::markdown::{MarkdownRenderer, EXCERPT_CHARS};

/// Cover image size in the article list
pub const CARD_COVER_IMAGE: (u32, u32) = (600, 340);
/// Cover image size on the article page
pub const PAGE_COVER_IMAGE: (u32, u32) = (1200, 600);

/// Publication date for display
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PublishDate {
    /// ISO date for the `datetime` attribute
    pub iso: String,
    pub label: String,
}

fn publish_date(article: &Article) -> Option<PublishDate> {
    article.published_at().map(|date| PublishDate {
        iso: date.format("%Y-%m-%d").to_string(),
        label: format_date(&date),
    })
}

/// Entry of the blog list
#[derive(Debug, Clone, Serialize)]
pub struct ArticleCard {
    pub href: String,
    pub title: String,
    /// Summary, or an excerpt of the body when none is set
    pub summary: Option<String>,
    pub cover: Option<String>,
    pub date: Option<PublishDate>,
}

impl ArticleCard {
    pub fn from_article(article: &Article, markdown: &MarkdownRenderer) -> Self {
        let summary = article
            .metadata
            .summary
            .clone()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| {
                article
                    .metadata
                    .body
                    .as_deref()
                    .map(|body| markdown.excerpt(body, EXCERPT_CHARS))
                    .filter(|s| !s.is_empty())
            });
        let (width, height) = CARD_COVER_IMAGE;

        Self {
            href: article_href(&article.slug),
            title: article.headline().to_string(),
            summary,
            cover: article.metadata.cover_image.as_ref().map(|i| i.sized(width, height)),
            date: publish_date(article),
        }
    }
}

/// Article page view
#[derive(Debug, Clone, Serialize)]
pub struct ArticleView {
    pub title: String,
    pub summary: Option<String>,
    pub cover: Option<String>,
    pub date: Option<PublishDate>,
    /// Rendered body
    pub body_html: String,
}

impl ArticleView {
    pub fn new(article: &Article, markdown: &MarkdownRenderer) -> Self {
        let body = article
            .metadata
            .body
            .as_deref()
            .or(article.content.as_deref())
            .unwrap_or_default();
        let (width, height) = PAGE_COVER_IMAGE;

        Self {
            title: article.headline().to_string(),
            summary: article.metadata.summary.clone().filter(|s| !s.trim().is_empty()),
            cover: article.metadata.cover_image.as_ref().map(|i| i.sized(width, height)),
            date: publish_date(article),
            body_html: markdown.render(body),
        }
    }
}
