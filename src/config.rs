//! Configuration module for Envelope Router.
//!
//! Loads configuration from YAML files and environment variables.

use config::{Config as ConfigLoader, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::BootstrapError;

/// Headers granted when no CORS headers are configured.
pub const DEFAULT_CORS_HEADERS: &[&str] = &["Accept", "Accept-Language", "Content-Language", "Origin"];

/// Methods granted when no CORS methods are configured.
pub const DEFAULT_CORS_METHODS: &[&str] = &["GET", "HEAD", "POST"];

/// Origins granted when no CORS origins are configured.
pub const DEFAULT_CORS_ORIGINS: &[&str] = &["*"];

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Prefix under which collaborator routes are mounted.
    pub base_path: String,
}

/// Cross-origin policy. Empty lists fall back to the defaults above.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub headers: Vec<String>,
    pub origins: Vec<String>,
    pub methods: Vec<String>,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (ENVELOPE_*, lists comma-separated)
    /// 2. config/local.yaml (if exists)
    /// 3. config/default.yaml (if exists)
    pub fn load() -> Result<Self, BootstrapError> {
        let config = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("ENVELOPE")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.headers")
                    .with_list_parse_key("cors.origins")
                    .with_list_parse_key("cors.methods")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Parse a complete configuration from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, BootstrapError> {
        let config = ConfigLoader::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            base_path: String::new(),
        }
    }
}

impl ServerConfig {
    /// Normalized mount prefix, or `None` when routes mount at the root.
    ///
    /// `"api/v1/"` becomes `"/api/v1"`; `""` and `"/"` yield `None`.
    pub fn mount_path(&self) -> Option<String> {
        let trimmed = self.base_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            None
        } else {
            Some(format!("/{trimmed}"))
        }
    }
}

impl CorsConfig {
    pub fn effective_headers(&self) -> Vec<&str> {
        effective(&self.headers, DEFAULT_CORS_HEADERS)
    }

    pub fn effective_origins(&self) -> Vec<&str> {
        effective(&self.origins, DEFAULT_CORS_ORIGINS)
    }

    pub fn effective_methods(&self) -> Vec<&str> {
        effective(&self.methods, DEFAULT_CORS_METHODS)
    }
}

fn effective<'a>(configured: &'a [String], defaults: &'a [&'a str]) -> Vec<&'a str> {
    let values: Vec<&str> = configured
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect();

    if values.is_empty() {
        defaults.to_vec()
    } else {
        values
    }
}
