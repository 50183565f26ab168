//! Deterministic provider for local runs and tests

use async_trait::async_trait;
use tracing::info;

use super::placeholders::rgb_placeholders;
use super::unified_provider::ProviderError;
use crate::core::traits::ImageProvider;

/// Returns the same three colored squares for every prompt
#[derive(Debug, Clone, Default)]
pub struct StubImageProvider;

impl StubImageProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImageProvider for StubImageProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate_images(&self, prompt: &str) -> Result<Vec<String>, ProviderError> {
        info!("Mock generator received prompt: {}", prompt);

        let images = rgb_placeholders();
        for index in 1..=images.len() {
            info!("Generated mock image {}", index);
        }

        Ok(images)
    }
}
