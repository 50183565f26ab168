//! Image provider trait definition

use async_trait::async_trait;

use crate::core::providers::unified_provider::ProviderError;

/// Something that turns a prompt into images.
///
/// Implementations return self-contained `data:image/png;base64,...` URLs in
/// the order the backend produced them. One call, no retry.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Generate images for `prompt`
    async fn generate_images(&self, prompt: &str) -> Result<Vec<String>, ProviderError>;
}
