//! Banner service

use std::sync::Arc;

use super::{find_all, QueryError, LIST_PROPS};
use crate::cosmic::{ContentStore, ObjectQuery};
use crate::models::{Banner, BANNER_TYPE};

/// Hero banner queries
pub struct BannerService {
    store: Arc<dyn ContentStore>,
}

impl BannerService {
    /// Create a new banner service
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Banners with the active flag set, in store order
    pub async fn active(&self) -> Result<Vec<Banner>, QueryError> {
        let query = ObjectQuery::new(BANNER_TYPE)
            .metadata("actif", true)
            .props(LIST_PROPS);
        find_all(self.store.as_ref(), &query, "banners").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmic::MemoryStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_active_filters_flag() {
        let store = MemoryStore::new(vec![
            json!({ "id": "b1", "slug": "soldes", "title": "Soldes", "type": BANNER_TYPE,
                    "metadata": { "titre": "Soldes d'hiver", "actif": true } }),
            json!({ "id": "b2", "slug": "noel", "title": "Noël", "type": BANNER_TYPE,
                    "metadata": { "titre": "Noël", "actif": false } }),
            json!({ "id": "b3", "slug": "rentree", "title": "Rentrée", "type": BANNER_TYPE,
                    "metadata": { "actif": true } }),
        ]);
        let service = BannerService::new(Arc::new(store));

        let banners = service.active().await.unwrap();

        let ids: Vec<&str> = banners.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b3"]);
        assert_eq!(banners[1].headline(), "Rentrée");
    }

    #[tokio::test]
    async fn test_no_active_banner_is_empty() {
        let service = BannerService::new(Arc::new(MemoryStore::default()));
        assert!(service.active().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let service = BannerService::new(Arc::new(
            MemoryStore::default().with_failure(BANNER_TYPE, 500),
        ));

        let err = service.active().await.unwrap_err();

        assert!(err.to_string().starts_with("Failed to fetch banners"));
    }
}
