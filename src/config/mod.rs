//! Configuration management for the service
//!
//! Configuration is read once at startup, either from a YAML file or from
//! environment variables (optionally seeded from `.env`), and is immutable
//! afterwards.

pub mod cli;
pub mod models;
pub mod validation;

pub use cli::CliArgs;
pub use models::*;

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub image_provider: ImageProviderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let mut config: Config = serde_yaml::from_str(&content)?;

        config.finish().await?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub async fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::from_lookup(|key| std::env::var(key).ok())?;
        config.finish().await?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise from the environment
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path).await,
            None => Self::from_env().await,
        }
    }

    /// Build configuration from a variable lookup. Unset and empty values
    /// fall back to defaults. Does not validate.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = Config::default();

        if let Some(host) = get("HOST") {
            config.server.host = host;
        }
        if let Some(port) = get("PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid PORT '{}': {}", port, e)))?;
        }
        if let Some(workers) = get("WORKERS") {
            config.server.workers = Some(workers.parse().map_err(|e| {
                GatewayError::Config(format!("Invalid WORKERS '{}': {}", workers, e))
            })?);
        }
        if let Some(name) = get("NAME") {
            config.server.greeting_name = name;
        }

        if let Some(project_id) = get("FIREBASE_PROJECT_ID").or_else(|| get("GOOGLE_CLOUD_PROJECT"))
        {
            config.auth.project_id = project_id;
        }
        config.auth.service_account_path = get("FIREBASE_SERVICE_ACCOUNT_PATH").map(Into::into);
        if let Some(jwks_url) = get("FIREBASE_JWKS_URL") {
            config.auth.jwks_url = jwks_url;
        }

        if let Some(kind) = get("IMAGE_GENERATOR_TYPE") {
            config.image_provider.kind = kind.parse().map_err(GatewayError::Config)?;
        }
        config.image_provider.api_key = get("GEMINI_API_KEY");
        if let Some(model) = get("GEMINI_MODEL") {
            config.image_provider.model = model;
        }
        if let Some(base_url) = get("GEMINI_BASE_URL") {
            config.image_provider.base_url = base_url;
        }

        if let Some(level) = get("LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(format) = get("LOG_FORMAT") {
            config.logging.format = format.parse().map_err(GatewayError::Config)?;
        }

        Ok(config)
    }

    /// Apply command line overrides
    pub fn apply_cli(&mut self, args: &CliArgs) {
        if let Some(port) = args.port {
            self.server.port = port;
        }
    }

    async fn finish(&mut self) -> Result<()> {
        self.auth
            .resolve_project_id()
            .await
            .map_err(GatewayError::Config)?;
        self.validate()
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| GatewayError::Config(format!("Server config error: {}", e)))?;

        self.auth
            .validate()
            .map_err(|e| GatewayError::Config(format!("Auth config error: {}", e)))?;

        self.image_provider
            .validate()
            .map_err(|e| GatewayError::Config(format!("Image provider config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }
}
