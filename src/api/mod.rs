//! HTTP layer - routing and handlers
//!
//! Server-rendered storefront routes:
//! - `/` home page
//! - `/categories/{slug}` and `/produits/{slug}` catalog pages
//! - `/blog` and `/blog/{slug}` articles
//! - `/static/{*path}` embedded assets
//! - `/healthz` liveness check
//!
//! Anything else renders the 404 page.

pub mod middleware;
pub mod pages;
pub mod static_files;

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub use middleware::AppState;

/// Build the complete router with middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/categories/{slug}", get(pages::category))
        .route("/produits/{slug}", get(pages::product))
        .route("/blog", get(pages::blog))
        .route("/blog/{slug}", get(pages::article))
        .route("/static/{*path}", get(static_files::serve_static))
        .route("/healthz", get(pages::health))
        .fallback(pages::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
