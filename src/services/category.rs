//! Category service

use std::sync::Arc;

use super::{find_all, find_one, QueryError, LIST_PROPS};
use crate::cosmic::{ContentStore, ObjectQuery};
use crate::models::{Category, CATEGORY_TYPE};

/// Category queries
pub struct CategoryService {
    store: Arc<dyn ContentStore>,
}

impl CategoryService {
    /// Create a new category service
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// All categories in store order
    pub async fn list(&self) -> Result<Vec<Category>, QueryError> {
        let query = ObjectQuery::new(CATEGORY_TYPE).props(LIST_PROPS);
        find_all(self.store.as_ref(), &query, "categories").await
    }

    /// Category with this slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Category>, QueryError> {
        let query = ObjectQuery::new(CATEGORY_TYPE).slug(slug);
        find_one(self.store.as_ref(), &query, "category").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmic::MemoryStore;
    use proptest::prelude::*;
    use serde_json::json;

    fn store() -> MemoryStore {
        MemoryStore::new(vec![
            json!({ "id": "c2", "slug": "video", "title": "Vidéo", "type": CATEGORY_TYPE,
                    "metadata": { "nom": "Vidéo & TV" } }),
            json!({ "id": "c1", "slug": "audio", "title": "Audio", "type": CATEGORY_TYPE }),
        ])
    }

    #[tokio::test]
    async fn test_list_keeps_store_order() {
        let service = CategoryService::new(Arc::new(store()));

        let slugs: Vec<String> = service.list().await.unwrap().into_iter().map(|c| c.slug).collect();

        assert_eq!(slugs, vec!["video", "audio"]);
    }

    #[tokio::test]
    async fn test_get_by_slug() {
        let service = CategoryService::new(Arc::new(store()));

        let video = service.get_by_slug("video").await.unwrap().unwrap();

        assert_eq!(video.display_name(), "Vidéo & TV");
        assert!(service.get_by_slug("jardin").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_not_found_status_is_empty_and_other_errors_propagate() {
        let missing = CategoryService::new(Arc::new(store().with_failure(CATEGORY_TYPE, 404)));
        let broken = CategoryService::new(Arc::new(store().with_failure(CATEGORY_TYPE, 502)));

        assert!(missing.list().await.unwrap().is_empty());
        assert!(missing.get_by_slug("audio").await.unwrap().is_none());
        assert!(broken.list().await.is_err());
        assert!(broken.get_by_slug("audio").await.is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        /// Unknown slugs resolve to `None`, never to an error.
        #[test]
        fn property_unknown_slug_is_none(slug in "[a-z]{3,12}-[0-9]{1,4}") {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let service = CategoryService::new(Arc::new(store()));

            let found = rt.block_on(service.get_by_slug(&slug));

            prop_assert!(matches!(found, Ok(None)));
        }
    }
}
