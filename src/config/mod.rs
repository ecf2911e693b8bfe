//! Configuration management
//!
//! This module handles loading and parsing configuration for the storefront.
//! Configuration can be loaded from:
//! - config.yml file
//! - Environment variables (override file settings)
//!
//! Missing optional values are filled with sensible defaults. The content API
//! credentials normally come from the environment (`COSMIC_BUCKET_SLUG`,
//! `COSMIC_READ_KEY`, `COSMIC_WRITE_KEY`).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Content API configuration
    #[serde(default)]
    pub cosmic: CosmicConfig,
    /// Site fallbacks used when the store has no site parameters
    #[serde(default)]
    pub site: SiteConfig,
    /// Template configuration
    #[serde(default)]
    pub templates: TemplateConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Content API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct CosmicConfig {
    /// Base URL of the object API
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Bucket identifier
    #[serde(default)]
    pub bucket_slug: String,
    /// Read key sent with every query
    #[serde(default)]
    pub read_key: String,
    /// Write key (held, never sent on reads)
    #[serde(default)]
    pub write_key: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CosmicConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            bucket_slug: String::new(),
            read_key: String::new(),
            write_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for CosmicConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmicConfig")
            .field("api_url", &self.api_url)
            .field("bucket_slug", &self.bucket_slug)
            .field("read_key", &"<redacted>")
            .field("write_key", &self.write_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_api_url() -> String {
    "https://api.cosmicjs.com/v3".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Site fallbacks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site name shown when the store has none
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Site description shown when the store has none
    #[serde(default = "default_site_description")]
    pub description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            description: default_site_description(),
        }
    }
}

fn default_site_name() -> String {
    "TechStore".to_string()
}

fn default_site_description() -> String {
    "Votre boutique en ligne de référence pour les dernières innovations technologiques."
        .to_string()
}

/// Template configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Directory whose `.html` files override the embedded templates
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Error type for configuration parsing
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {message}")]
    ParseError {
        path: String,
        message: String,
    },
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

impl Config {
    /// Load configuration from file
    ///
    /// If the file doesn't exist or is empty, returns default configuration.
    /// If the file exists but is invalid YAML, returns an error with details.
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: format_yaml_error(&e),
        })
    }

    /// Load configuration from file with environment variable overrides
    ///
    /// Environment variables:
    /// - TECHSTORE_SERVER_HOST
    /// - TECHSTORE_SERVER_PORT
    /// - TECHSTORE_SITE_NAME
    /// - TECHSTORE_TEMPLATES_PATH
    /// - COSMIC_API_URL
    /// - COSMIC_BUCKET_SLUG
    /// - COSMIC_READ_KEY
    /// - COSMIC_WRITE_KEY
    /// - COSMIC_TIMEOUT_SECS
    pub fn load_with_env(path: &std::path::Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("TECHSTORE_SERVER_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("TECHSTORE_SERVER_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                self.server.port = port;
            }
        }
        if let Ok(name) = std::env::var("TECHSTORE_SITE_NAME") {
            self.site.name = name;
        }
        if let Ok(path) = std::env::var("TECHSTORE_TEMPLATES_PATH") {
            self.templates.path = Some(PathBuf::from(path));
        }

        if let Ok(url) = std::env::var("COSMIC_API_URL") {
            self.cosmic.api_url = url;
        }
        if let Ok(bucket) = std::env::var("COSMIC_BUCKET_SLUG") {
            self.cosmic.bucket_slug = bucket;
        }
        if let Ok(key) = std::env::var("COSMIC_READ_KEY") {
            self.cosmic.read_key = key;
        }
        if let Ok(key) = std::env::var("COSMIC_WRITE_KEY") {
            self.cosmic.write_key = Some(key);
        }
        if let Ok(timeout) = std::env::var("COSMIC_TIMEOUT_SECS") {
            if let Ok(timeout) = timeout.parse::<u64>() {
                self.cosmic.timeout_secs = timeout;
            }
        }
    }

    /// Check that the content API can be reached with this configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cosmic.bucket_slug.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "cosmic.bucket_slug is required (set COSMIC_BUCKET_SLUG)".to_string(),
            ));
        }
        if self.cosmic.read_key.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "cosmic.read_key is required (set COSMIC_READ_KEY)".to_string(),
            ));
        }
        if self.cosmic.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "cosmic.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Format YAML parsing error with location and context
fn format_yaml_error(e: &serde_yaml::Error) -> String {
    if let Some(location) = e.location() {
        format!(
            "at line {}, column {}: {}",
            location.line(),
            location.column(),
            e
        )
    } else {
        e.to_string()
    }
}

// Shared mutex for config tests that modify environment variables.
#[cfg(test)]
static CONFIG_ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());


/// Property-based tests for configuration parsing
#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn valid_config_strategy() -> impl Strategy<Value = Config> {
        (
            "[a-z0-9.]{1,20}",
            1024u16..65535,
            "[a-z][a-z0-9-]{0,20}",
            "[A-Za-z0-9]{1,32}",
            1u64..120,
            "[A-Za-z]{1,30}",
        )
            .prop_map(|(host, port, bucket, key, timeout, name)| {
                let mut config = Config::default();
                config.server.host = host;
                config.server.port = port;
                config.cosmic.bucket_slug = bucket;
                config.cosmic.read_key = key;
                config.cosmic.timeout_secs = timeout;
                config.site.name = name;
                config
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        /// A serialized configuration loads back with the same values.
        #[test]
        fn config_roundtrip(config in valid_config_strategy()) {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = NamedTempFile::new().unwrap();
            write!(file, "{}", yaml).unwrap();

            let loaded = Config::load(file.path()).unwrap();

            prop_assert!(loaded.validate().is_ok());
            prop_assert_eq!(loaded.server.host, config.server.host);
            prop_assert_eq!(loaded.server.port, config.server.port);
            prop_assert_eq!(loaded.cosmic.bucket_slug, config.cosmic.bucket_slug);
            prop_assert_eq!(loaded.cosmic.read_key, config.cosmic.read_key);
            prop_assert_eq!(loaded.cosmic.timeout_secs, config.cosmic.timeout_secs);
            prop_assert_eq!(loaded.site.name, config.site.name);
        }
    }
}
