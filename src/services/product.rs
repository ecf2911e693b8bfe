//! Product service
//!
//! Catalog reads: the full product list (newest first), the popular selection,
//! products of a category, a single product and its related products.
//! Products are always read with one level of reference expansion so their
//! category comes inlined.

use serde_json::Value;
use std::sync::Arc;

use super::{decode, find_all, find_one_raw, sort_newest_first, QueryError, LIST_PROPS};
use crate::cosmic::{ContentStore, ObjectQuery};
use crate::models::{Product, ProductMetadata, PRODUCT_TYPE};

/// Number of related products shown on a product page
pub const RELATED_PRODUCTS_LIMIT: usize = 4;

/// Product queries
pub struct ProductService {
    store: Arc<dyn ContentStore>,
}

impl ProductService {
    /// Create a new product service
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    fn list_query() -> ObjectQuery {
        ObjectQuery::new(PRODUCT_TYPE).props(LIST_PROPS).depth(1)
    }

    /// All products, newest first
    pub async fn list(&self) -> Result<Vec<Product>, QueryError> {
        let mut products =
            find_all::<ProductMetadata>(self.store.as_ref(), &Self::list_query(), "products")
                .await?;
        sort_newest_first(&mut products, |p| p.created_at);
        Ok(products)
    }

    /// Products flagged popular.
    ///
    /// Never fails: errors are logged and yield an empty list.
    pub async fn popular(&self) -> Vec<Product> {
        match self.list().await {
            Ok(products) => products.into_iter().filter(Product::is_popular).collect(),
            Err(e) => {
                tracing::warn!("Error fetching popular products: {}", e);
                Vec::new()
            }
        }
    }

    /// Products referencing the category with this id, in store order
    pub async fn by_category(&self, category_id: &str) -> Result<Vec<Product>, QueryError> {
        let query = Self::list_query().metadata("categorie", category_id);
        find_all(self.store.as_ref(), &query, "products by category").await
    }

    /// Product with this slug.
    ///
    /// A product stored without metadata is treated as missing.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Product>, QueryError> {
        let query = ObjectQuery::new(PRODUCT_TYPE).slug(slug).depth(1);
        let Some(object) = find_one_raw(self.store.as_ref(), &query, "product").await? else {
            return Ok(None);
        };

        if object.get("metadata").map_or(true, Value::is_null) {
            tracing::debug!(slug, "product has no metadata");
            return Ok(None);
        }

        decode(object, "product").map(Some)
    }

    /// Up to `limit` other products from the same category.
    ///
    /// Never fails: errors are logged and yield an empty list.
    pub async fn related(&self, product: &Product, limit: usize) -> Vec<Product> {
        let Some(category_id) = product.category_id() else {
            return Vec::new();
        };

        match self.by_category(category_id).await {
            Ok(products) => products
                .into_iter()
                .filter(|p| p.id != product.id)
                .take(limit)
                .collect(),
            Err(e) => {
                tracing::warn!(category_id, "Error fetching related products: {}", e);
                Vec::new()
            }
        }
    }
}
