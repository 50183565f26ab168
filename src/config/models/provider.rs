//! Image provider configuration

use super::*;
use crate::config::validation::validate_http_url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which image provider the process runs with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageProviderKind {
    /// Google Gemini image generation
    #[default]
    Gemini,
    /// Fixed placeholder images, no outbound calls
    #[serde(alias = "mock")]
    Stub,
}

impl FromStr for ImageProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "mock" | "stub" => Ok(Self::Stub),
            other => Err(format!("unsupported image generator type: {}", other)),
        }
    }
}

impl fmt::Display for ImageProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gemini => write!(f, "gemini"),
            Self::Stub => write!(f, "mock"),
        }
    }
}

/// Image provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageProviderConfig {
    /// Provider variant, fixed for the process lifetime
    #[serde(default)]
    pub kind: ImageProviderKind,
    /// Gemini API key
    pub api_key: Option<String>,
    /// Model used for generateContent
    #[serde(default = "default_gemini_model")]
    pub model: String,
    /// API base URL
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    /// API version path segment
    #[serde(default = "default_gemini_api_version")]
    pub api_version: String,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

impl Default for ImageProviderConfig {
    fn default() -> Self {
        Self {
            kind: ImageProviderKind::default(),
            api_key: None,
            model: default_gemini_model(),
            base_url: default_gemini_base_url(),
            api_version: default_gemini_api_version(),
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

impl ImageProviderConfig {
    /// Validate provider configuration
    pub fn validate(&self) -> Result<(), String> {
        match self.kind {
            ImageProviderKind::Stub => Ok(()),
            ImageProviderKind::Gemini => {
                let has_key = self
                    .api_key
                    .as_deref()
                    .is_some_and(|key| !key.trim().is_empty());
                if !has_key {
                    return Err("GEMINI_API_KEY is required for the gemini provider".to_string());
                }

                if self.model.trim().is_empty() {
                    return Err("Gemini model cannot be empty".to_string());
                }

                validate_http_url(&self.base_url, "Gemini base URL")?;

                if self.request_timeout == 0 || self.connect_timeout == 0 {
                    return Err("Provider timeouts must be greater than 0".to_string());
                }

                Ok(())
            }
        }
    }
}
