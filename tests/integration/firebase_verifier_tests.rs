//! Firebase ID token verification against a mocked key endpoint

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{JWKS_PATH, KEY_ID, PROJECT_ID, TokenFactory, jwks_body};
    use crochet_mockup_api::auth::{AuthError, FirebaseTokenVerifier, IdentityVerifier};
    use crochet_mockup_api::config::AuthConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn key_server(kid: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(JWKS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(jwks_body(kid)))
            .mount(&server)
            .await;
        server
    }

    fn verifier(server: &MockServer) -> FirebaseTokenVerifier {
        let config = AuthConfig {
            project_id: PROJECT_ID.to_string(),
            jwks_url: format!("{}{}", server.uri(), JWKS_PATH),
            ..Default::default()
        };
        FirebaseTokenVerifier::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_valid_token_yields_identity() {
        let server = key_server(KEY_ID).await;

        let identity = verifier(&server)
            .verify(&TokenFactory::valid_token("uid-123"))
            .await
            .unwrap();

        assert_eq!(identity.subject_id, "uid-123");
        assert_eq!(identity.email, "uid-123@example.com");
        assert!(identity.email_verified);
    }

    #[tokio::test]
    async fn test_missing_email_claims_default() {
        let server = key_server(KEY_ID).await;
        let mut claims = TokenFactory::valid_claims("anon");
        claims.email = None;
        claims.email_verified = None;

        let identity = verifier(&server)
            .verify(&TokenFactory::sign(&claims, KEY_ID))
            .await
            .unwrap();

        assert_eq!(identity.email, "");
        assert!(!identity.email_verified);
    }

    #[tokio::test]
    async fn test_keys_fetched_on_every_verification() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(JWKS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(jwks_body(KEY_ID)))
            .expect(2)
            .mount(&server)
            .await;

        let verifier = verifier(&server);
        let token = TokenFactory::valid_token("uid-1");
        verifier.verify(&token).await.unwrap();
        verifier.verify(&token).await.unwrap();
    }

    #[tokio::test]
    async fn test_wrong_audience_rejected() {
        let server = key_server(KEY_ID).await;
        let mut claims = TokenFactory::valid_claims("uid-1");
        claims.aud = "another-project".to_string();

        let err = verifier(&server)
            .verify(&TokenFactory::sign(&claims, KEY_ID))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[tokio::test]
    async fn test_wrong_issuer_rejected() {
        let server = key_server(KEY_ID).await;
        let mut claims = TokenFactory::valid_claims("uid-1");
        claims.iss = "https://accounts.example.com".to_string();

        let err = verifier(&server)
            .verify(&TokenFactory::sign(&claims, KEY_ID))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[tokio::test]
    async fn test_expired_token_rejected() {
        let server = key_server(KEY_ID).await;
        let mut claims = TokenFactory::valid_claims("uid-1");
        claims.iat -= 7200;
        claims.exp = chrono::Utc::now().timestamp() - 3600;

        let err = verifier(&server)
            .verify(&TokenFactory::sign(&claims, KEY_ID))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[tokio::test]
    async fn test_future_issue_time_rejected() {
        let server = key_server(KEY_ID).await;
        let mut claims = TokenFactory::valid_claims("uid-1");
        claims.iat = chrono::Utc::now().timestamp() + 600;

        let err = verifier(&server)
            .verify(&TokenFactory::sign(&claims, KEY_ID))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::IssuedInFuture));
    }

    #[tokio::test]
    async fn test_empty_subject_rejected() {
        let server = key_server(KEY_ID).await;
        let claims = TokenFactory::valid_claims("");

        let err = verifier(&server)
            .verify(&TokenFactory::sign(&claims, KEY_ID))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmptySubject));
    }

    #[tokio::test]
    async fn test_unknown_key_id_rejected() {
        let server = key_server("rotated-key").await;

        let err = verifier(&server)
            .verify(&TokenFactory::valid_token("uid-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UnknownKeyId(kid) if kid == KEY_ID));
    }

    #[tokio::test]
    async fn test_key_endpoint_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(JWKS_PATH))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = verifier(&server)
            .verify(&TokenFactory::valid_token("uid-1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::KeyFetch(_)));
    }

    #[tokio::test]
    async fn test_tampered_signature_rejected() {
        let server = key_server(KEY_ID).await;
        let token = TokenFactory::valid_token("uid-1");
        let (unsigned, _signature) = token.rsplit_once('.').unwrap();
        let other = TokenFactory::valid_token("uid-2");
        let (_, other_signature) = other.rsplit_once('.').unwrap();
        let forged = format!("{}.{}", unsigned, other_signature);

        let err = verifier(&server).verify(&forged).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }
}
