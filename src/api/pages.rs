//! Page handlers

use axum::{
    extract::{Path, Query, State},
    http::Uri,
    response::Response,
};
use serde::Deserialize;

use super::middleware::AppState;
use crate::components::MobileMenu;
use crate::pages::{PageError, PageRequest};

/// Query parameters understood by every page
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub menu: Option<String>,
    pub slide: Option<String>,
    pub image: Option<String>,
}

impl PageQuery {
    /// Request inputs for a page at `path`. Unparsable indexes are ignored.
    pub fn into_request(self, path: &str) -> PageRequest {
        let index = |raw: Option<String>| raw.and_then(|s| s.trim().parse::<i64>().ok());
        PageRequest {
            path: path.to_string(),
            menu: MobileMenu::from_query(self.menu.as_deref()),
            slide: index(self.slide),
            image: index(self.image),
        }
    }
}

/// GET /
pub async fn home(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Response {
    let request = query.into_request(uri.path());
    let result = state.storefront.home(&request).await;
    state.respond(&request, result).await
}

/// GET /categories/{slug}
pub async fn category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Response {
    let request = query.into_request(uri.path());
    let result = state.storefront.category(&request, &slug).await;
    state.respond(&request, result).await
}

/// GET /produits/{slug}
pub async fn product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Response {
    let request = query.into_request(uri.path());
    let result = state.storefront.product(&request, &slug).await;
    state.respond(&request, result).await
}

/// GET /blog
pub async fn blog(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Response {
    let request = query.into_request(uri.path());
    let result = state.storefront.blog(&request).await;
    state.respond(&request, result).await
}

/// GET /blog/{slug}
pub async fn article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Response {
    let request = query.into_request(uri.path());
    let result = state.storefront.article(&request, &slug).await;
    state.respond(&request, result).await
}

/// Any unrouted path
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    let request = PageRequest::new(uri.path());
    state
        .error_response(&request, PageError::NotFound(format!("Page '{}'", uri.path())))
        .await
}

/// GET /healthz
pub async fn health() -> &'static str {
    "ok"
}
