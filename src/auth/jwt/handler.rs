//! Core verifier implementation

use super::types::{FirebaseClaims, FirebaseTokenVerifier};
use crate::auth::types::{AuthError, AuthenticatedIdentity, IdentityVerifier};
use crate::config::AuthConfig;
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use std::time::Duration;
use tracing::debug;

/// Seconds of clock skew tolerated on `exp` and `iat`
const CLOCK_LEEWAY_SECS: u64 = 60;

impl FirebaseTokenVerifier {
    /// Create a verifier for the configured project
    pub fn new(config: &AuthConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(|e| GatewayError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            jwks_url: config.jwks_url.clone(),
            project_id: config.project_id.clone(),
            issuer: config.issuer(),
        })
    }

    /// Fetch the provider's current signing keys
    async fn fetch_key_set(&self) -> std::result::Result<JwkSet, AuthError> {
        let response = self
            .http_client
            .get(&self.jwks_url)
            .send()
            .await
            .map_err(|e| AuthError::KeyFetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| AuthError::KeyFetch(e.to_string()))?;

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| AuthError::KeyFetch(format!("invalid key set: {}", e)))
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.leeway = CLOCK_LEEWAY_SECS;
        validation.set_audience(&[&self.project_id]);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "aud", "iss", "sub"]);
        validation
    }
}

#[async_trait]
impl IdentityVerifier for FirebaseTokenVerifier {
    async fn verify(&self, token: &str) -> std::result::Result<AuthenticatedIdentity, AuthError> {
        let header = decode_header(token).map_err(AuthError::MalformedToken)?;
        if header.alg != Algorithm::RS256 {
            return Err(AuthError::UnsupportedAlgorithm(format!("{:?}", header.alg)));
        }
        let kid = header.kid.ok_or(AuthError::MissingKeyId)?;

        let keys = self.fetch_key_set().await?;
        let jwk = keys
            .find(&kid)
            .ok_or_else(|| AuthError::UnknownKeyId(kid.clone()))?;
        let key = DecodingKey::from_jwk(jwk).map_err(AuthError::InvalidKey)?;

        let token_data = decode::<FirebaseClaims>(token, &key, &self.validation())
            .map_err(AuthError::InvalidToken)?;

        let now = chrono::Utc::now().timestamp();
        if token_data.claims.iat > now + CLOCK_LEEWAY_SECS as i64 {
            return Err(AuthError::IssuedInFuture);
        }

        debug!("Token verified for user: {}", token_data.claims.sub);
        token_data.claims.into_identity()
    }
}
