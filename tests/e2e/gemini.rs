//! Live Gemini image generation

#[cfg(test)]
mod tests {
    use crate::skip_without_env;
    use crochet_mockup_api::GenerateRequest;
    use crochet_mockup_api::config::{ImageProviderConfig, ImageProviderKind};
    use crochet_mockup_api::core::prompt::build_prompt;
    use crochet_mockup_api::core::providers::create_image_provider;
    use crochet_mockup_api::core::providers::placeholders::PNG_DATA_URL_PREFIX;

    #[tokio::test]
    #[ignore]
    async fn test_gemini_generates_images() {
        skip_without_env!("GEMINI_API_KEY");

        let config = ImageProviderConfig {
            kind: ImageProviderKind::Gemini,
            api_key: std::env::var("GEMINI_API_KEY").ok(),
            ..Default::default()
        };
        let provider = create_image_provider(&config).unwrap();

        let prompt = build_prompt(&GenerateRequest {
            project_description: "a small amigurumi whale".to_string(),
            color_vibe: "deep sea blues".to_string(),
            color_count: "2-4".to_string(),
        });

        let images = provider.generate_images(&prompt).await.unwrap();
        assert!(!images.is_empty());
        assert!(images.iter().all(|url| url.starts_with(PNG_DATA_URL_PREFIX)));
    }
}
