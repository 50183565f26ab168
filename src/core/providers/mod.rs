//! Image provider implementations
//!
//! The variant is chosen once at startup from [`ImageProviderConfig`] and
//! shared behind an `Arc` for the lifetime of the process.

pub mod gemini;
pub mod placeholders;
pub mod stub;
pub mod unified_provider;

use std::sync::Arc;

use tracing::info;

use crate::config::{ImageProviderConfig, ImageProviderKind};
use crate::core::traits::ImageProvider;
use crate::utils::error::Result;

pub use gemini::GeminiImageProvider;
pub use stub::StubImageProvider;
pub use unified_provider::ProviderError;

/// Build the configured image provider
pub fn create_image_provider(config: &ImageProviderConfig) -> Result<Arc<dyn ImageProvider>> {
    let provider: Arc<dyn ImageProvider> = match config.kind {
        ImageProviderKind::Gemini => {
            let gemini_config = gemini::GeminiConfig::from_provider_config(config)?;
            let provider = GeminiImageProvider::new(gemini_config)?;
            info!(model = provider.model(), "Gemini image provider ready");
            Arc::new(provider)
        }
        ImageProviderKind::Stub => Arc::new(StubImageProvider::new()),
    };

    Ok(provider)
}
