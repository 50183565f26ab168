//! Gemini Client
//!
//! Thin reqwest wrapper around the Google AI Studio `generateContent` call.

use std::time::Duration;

use reqwest::{Client, ClientBuilder, Response};
use tracing::{debug, warn};

use crate::core::providers::unified_provider::ProviderError;

use super::config::GeminiConfig;
use super::error::{GeminiErrorMapper, gemini_config_error, gemini_parse_error};
use super::models::{GenerateContentRequest, GenerateContentResponse};

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .build()
            .map_err(|e| gemini_config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// One `generateContent` call. Not retried.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let url = self.config.get_endpoint("generateContent");
        debug!(model = %self.config.model, "Sending Gemini generateContent request");

        let response = self
            .http_client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(GeminiErrorMapper::from_reqwest)?;

        self.handle_response(response).await
    }

    async fn handle_response(
        &self,
        response: Response,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(GeminiErrorMapper::from_reqwest)?;

        if !status.is_success() {
            warn!(status = status.as_u16(), body = %response_text, "Gemini request failed");
            return Err(GeminiErrorMapper::from_http_status(
                status.as_u16(),
                &response_text,
            ));
        }

        serde_json::from_str(&response_text)
            .map_err(|e| gemini_parse_error(format!("Failed to parse response JSON: {}", e)))
    }
}
