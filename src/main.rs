//! TechStore - server-rendered storefront for a Cosmic bucket

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use techstore::{
    api::{self, AppState},
    config::Config,
    cosmic::CosmicClient,
    pages::Storefront,
    theme::ThemeEngine,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "techstore=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TechStore...");

    // Load configuration
    let config = Config::load_with_env(Path::new("config.yml"))?;
    config.validate()?;
    tracing::info!("Configuration loaded");

    // Content store
    let client = CosmicClient::new(&config.cosmic)?;
    tracing::info!("Content bucket: {}", client.bucket_slug());
    if client.has_write_key() {
        tracing::debug!("Write key configured, unused by storefront reads");
    }
    let storefront = Storefront::new(Arc::new(client), config.site.clone());

    // Initialize theme engine
    let theme_engine = ThemeEngine::new(config.templates.path.as_deref())?;
    match &config.templates.path {
        Some(path) => tracing::info!("Templates loaded, overrides from {:?}", path),
        None => tracing::info!("Templates loaded"),
    }

    // Build router
    let app = api::build_router(AppState::new(storefront, theme_engine));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
