//! Site parameters service

use std::sync::Arc;

use super::{find_all, QueryError, LIST_PROPS};
use crate::cosmic::{ContentStore, ObjectQuery};
use crate::models::{SiteParameters, SITE_PARAMETERS_TYPE};

/// Reads the site parameters singleton
pub struct SiteService {
    store: Arc<dyn ContentStore>,
}

impl SiteService {
    /// Create a new site service
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// First site parameters record, if any
    pub async fn parameters(&self) -> Result<Option<SiteParameters>, QueryError> {
        let query = ObjectQuery::new(SITE_PARAMETERS_TYPE).props(LIST_PROPS);
        let records: Vec<SiteParameters> =
            find_all(self.store.as_ref(), &query, "site parameters").await?;
        Ok(records.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmic::MemoryStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_parameters_takes_first_record() {
        let service = SiteService::new(Arc::new(MemoryStore::new(vec![
            json!({ "id": "s1", "slug": "site", "title": "Site", "type": SITE_PARAMETERS_TYPE,
                    "metadata": { "nom_site": "Boutique Démo", "telephone": "01 23 45 67 89" } }),
            json!({ "id": "s2", "slug": "doublon", "title": "Doublon", "type": SITE_PARAMETERS_TYPE }),
        ])));

        let params = service.parameters().await.unwrap().unwrap();

        assert_eq!(params.id, "s1");
        assert_eq!(params.metadata.site_name.as_deref(), Some("Boutique Démo"));
    }

    #[tokio::test]
    async fn test_missing_parameters() {
        let empty = SiteService::new(Arc::new(MemoryStore::default()));
        let broken = SiteService::new(Arc::new(
            MemoryStore::default().with_failure(SITE_PARAMETERS_TYPE, 500),
        ));

        assert!(empty.parameters().await.unwrap().is_none());
        assert!(broken.parameters().await.is_err());
    }
}
