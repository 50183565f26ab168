//! Gemini Configuration Module

use crate::config::ImageProviderConfig;
use crate::core::providers::unified_provider::ProviderError;

use super::error::gemini_config_error;

/// Connection settings for the Google AI Studio endpoint
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub api_version: String,
    /// Request timeout in seconds
    pub request_timeout: u64,
    /// Connect timeout in seconds
    pub connect_timeout: u64,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let defaults = ImageProviderConfig::default();
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: defaults.base_url,
            api_version: defaults.api_version,
            request_timeout: defaults.request_timeout,
            connect_timeout: defaults.connect_timeout,
        }
    }

    /// Point the client at another host, used against local mock servers
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn from_provider_config(config: &ImageProviderConfig) -> Result<Self, ProviderError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| gemini_config_error("GEMINI_API_KEY is not set"))?;

        Ok(Self {
            api_key: api_key.to_string(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            request_timeout: config.request_timeout,
            connect_timeout: config.connect_timeout,
        })
    }

    /// Full URL for a model operation such as `generateContent`
    pub fn get_endpoint(&self, operation: &str) -> String {
        format!(
            "{}/{}/models/{}:{}?key={}",
            self.base_url, self.api_version, self.model, operation, self.api_key
        )
    }
}
