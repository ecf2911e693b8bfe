//! Article service
//!
//! Blog reads. Articles are ordered by their publish date metafield rather
//! than the store's creation time, so back-dated posts land where editors
//! expect them.

use std::sync::Arc;

use super::{find_all, find_one, sort_newest_first, QueryError, LIST_PROPS};
use crate::cosmic::{ContentStore, ObjectQuery};
use crate::models::{Article, ArticleMetadata, ARTICLE_TYPE};

/// Blog article queries
pub struct ArticleService {
    store: Arc<dyn ContentStore>,
}

impl ArticleService {
    /// Create a new article service
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// All articles, most recently published first
    pub async fn list(&self) -> Result<Vec<Article>, QueryError> {
        let query = ObjectQuery::new(ARTICLE_TYPE).props(LIST_PROPS);
        let mut articles =
            find_all::<ArticleMetadata>(self.store.as_ref(), &query, "articles").await?;
        sort_newest_first(&mut articles, Article::published_at);
        Ok(articles)
    }

    /// Article with this slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Article>, QueryError> {
        let query = ObjectQuery::new(ARTICLE_TYPE).slug(slug);
        find_one(self.store.as_ref(), &query, "article").await
    }
}
