//! Gemini provider against a mocked generateContent endpoint

#[cfg(test)]
mod tests {
    use crochet_mockup_api::GatewayError;
    use crochet_mockup_api::core::providers::ProviderError;
    use crochet_mockup_api::core::providers::gemini::{GeminiConfig, GeminiImageProvider};
    use crochet_mockup_api::core::providers::placeholders::{TRANSPARENT_PNG, png_data_url};
    use crochet_mockup_api::core::traits::ImageProvider;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL: &str = "gemini-test-image";
    const GENERATE_PATH: &str = "/v1beta/models/gemini-test-image:generateContent";

    fn provider(server: &MockServer) -> GeminiImageProvider {
        let config = GeminiConfig::new("test-key", MODEL).with_base_url(server.uri());
        GeminiImageProvider::new(config).unwrap()
    }

    async fn respond_with(server: &MockServer, template: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(query_param("key", "test-key"))
            .respond_with(template)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_request_body_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(body_json(json!({
                "contents": [{"role": "user", "parts": [{"text": "a striped beanie"}]}],
                "generationConfig": {"responseModalities": ["TEXT", "IMAGE"]}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": "AAEC"}}]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let images = provider(&server).generate_images("a striped beanie").await.unwrap();
        assert_eq!(images, vec!["data:image/png;base64,AAEC"]);
    }

    #[tokio::test]
    async fn test_multiple_images_keep_order() {
        let server = MockServer::start().await;
        respond_with(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"role": "model", "parts": [
                    {"text": "Here are your mockups"},
                    {"inlineData": {"mimeType": "image/png", "data": "AAEC"}},
                    {"inlineData": {"mimeType": "image/png", "data": "AwQF"}}
                ]}}]
            })),
        )
        .await;

        let images = provider(&server).generate_images("prompt").await.unwrap();
        assert_eq!(
            images,
            vec!["data:image/png;base64,AAEC", "data:image/png;base64,AwQF"]
        );
    }

    #[tokio::test]
    async fn test_text_only_answer_gives_placeholders() {
        let server = MockServer::start().await;
        respond_with(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "I can only describe it"}]}}]
            })),
        )
        .await;

        let images = provider(&server).generate_images("prompt").await.unwrap();
        assert_eq!(images, vec![png_data_url(TRANSPARENT_PNG); 3]);
    }

    #[tokio::test]
    async fn test_no_candidates_is_error() {
        let server = MockServer::start().await;
        respond_with(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({"candidates": []})),
        )
        .await;

        let err = provider(&server).generate_images("prompt").await.unwrap_err();
        assert!(matches!(err, ProviderError::NoCandidates { .. }));
    }

    #[tokio::test]
    async fn test_http_errors_are_mapped() {
        let cases: [(u16, &str); 4] = [
            (401, "authentication"),
            (403, "authentication"),
            (429, "rate_limit"),
            (500, "api_error"),
        ];

        for (status, expected) in cases {
            let server = MockServer::start().await;
            respond_with(
                &server,
                ResponseTemplate::new(status).set_body_string("{\"error\":{\"message\":\"nope\"}}"),
            )
            .await;

            let err = provider(&server).generate_images("prompt").await.unwrap_err();
            let kind = match err {
                ProviderError::Authentication { .. } => "authentication",
                ProviderError::RateLimit { .. } => "rate_limit",
                ProviderError::ApiError { .. } => "api_error",
                other => panic!("unexpected error for {}: {:?}", status, other),
            };
            assert_eq!(kind, expected, "status {}", status);
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let server = MockServer::start().await;
        respond_with(&server, ResponseTemplate::new(200).set_body_string("<html>")).await;

        let err = provider(&server).generate_images("prompt").await.unwrap_err();
        assert!(matches!(err, ProviderError::ResponseParsing { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let config = GeminiConfig::new("test-key", MODEL).with_base_url("http://127.0.0.1:9");
        let provider = GeminiImageProvider::new(config).unwrap();

        let err = provider.generate_images("prompt").await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Network { .. } | ProviderError::Timeout { .. }
        ));
    }

    #[tokio::test]
    async fn test_transport_error_does_not_expose_api_key() {
        let config =
            GeminiConfig::new("SUPER-SECRET-KEY", MODEL).with_base_url("http://127.0.0.1:9");
        let provider = GeminiImageProvider::new(config).unwrap();

        let err = provider.generate_images("prompt").await.unwrap_err();
        assert_eq!(err.provider(), "gemini");

        let logged = format!("Error generating images: {}", GatewayError::Generation(err));
        assert!(!logged.contains("SUPER-SECRET-KEY"), "{}", logged);
        assert!(!logged.contains("key="), "{}", logged);
    }
}
