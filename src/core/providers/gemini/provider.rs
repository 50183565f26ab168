//! Gemini image provider

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use tracing::{debug, info};

use crate::core::providers::placeholders::{png_data_url_from_bytes, transparent_placeholders};
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::ImageProvider;

use super::client::GeminiClient;
use super::config::GeminiConfig;
use super::error::{PROVIDER_NAME, gemini_parse_error};
use super::models::{GenerateContentRequest, GenerateContentResponse};

#[derive(Debug, Clone)]
pub struct GeminiImageProvider {
    client: GeminiClient,
}

impl GeminiImageProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            client: GeminiClient::new(config)?,
        })
    }

    pub fn model(&self) -> &str {
        &self.client.config().model
    }
}

/// Pull every inline image out of the first candidate.
///
/// No candidates is an error. A candidate without image parts yields the
/// transparent placeholder gallery instead of an empty list.
pub fn extract_images(response: GenerateContentResponse) -> Result<Vec<String>, ProviderError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(ProviderError::NoCandidates {
            provider: PROVIDER_NAME,
        })?;

    let parts = candidate.content.map(|content| content.parts).unwrap_or_default();

    let mut images = Vec::new();
    for part in parts {
        if let Some(text) = part.text.as_deref() {
            debug!(text, "Gemini returned text part");
        }

        if let Some(inline) = part.inline_data {
            let bytes = general_purpose::STANDARD
                .decode(inline.data.as_bytes())
                .map_err(|e| gemini_parse_error(format!("Invalid inline image data: {}", e)))?;
            images.push(png_data_url_from_bytes(&bytes));
        }
    }

    if images.is_empty() {
        info!("Gemini returned no images, using placeholders");
        return Ok(transparent_placeholders());
    }

    Ok(images)
}

#[async_trait]
impl ImageProvider for GeminiImageProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn generate_images(&self, prompt: &str) -> Result<Vec<String>, ProviderError> {
        let request = GenerateContentRequest::image_prompt(prompt);
        let response = self.client.generate_content(&request).await?;
        let images = extract_images(response)?;
        debug!(count = images.len(), "Gemini images extracted");
        Ok(images)
    }
}
