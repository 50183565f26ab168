//! Identity provider configuration

use super::*;
use crate::config::validation::validate_http_url;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Firebase ID token verification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Firebase project id; tokens must carry it as audience
    #[serde(default)]
    pub project_id: String,
    /// Service account credentials file, used to recover the project id
    pub service_account_path: Option<PathBuf>,
    /// JWK set published by the identity provider
    #[serde(default = "default_jwks_url")]
    pub jwks_url: String,
    /// Issuer prefix; the full issuer is this value followed by the project id
    #[serde(default = "default_issuer_base")]
    pub issuer_base: String,
    /// Timeout for the key set fetch in seconds
    #[serde(default = "default_key_fetch_timeout")]
    pub request_timeout: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            service_account_path: None,
            jwks_url: default_jwks_url(),
            issuer_base: default_issuer_base(),
            request_timeout: default_key_fetch_timeout(),
        }
    }
}

/// The one field of a service account key file we care about
#[derive(Debug, Deserialize)]
struct ServiceAccountKey {
    project_id: String,
}

impl AuthConfig {
    /// Expected `iss` claim for this project
    pub fn issuer(&self) -> String {
        format!("{}{}", self.issuer_base, self.project_id)
    }

    /// Fill an empty project id from the service account file, if one is configured
    pub async fn resolve_project_id(&mut self) -> Result<(), String> {
        if !self.project_id.trim().is_empty() {
            return Ok(());
        }

        let Some(path) = &self.service_account_path else {
            return Ok(());
        };

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read service account file {:?}: {}", path, e))?;

        let key: ServiceAccountKey = serde_json::from_str(&content)
            .map_err(|e| format!("Invalid service account file {:?}: {}", path, e))?;

        debug!("Project id taken from service account file: {}", key.project_id);
        self.project_id = key.project_id;
        Ok(())
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.project_id.trim().is_empty() {
            return Err(
                "Firebase project id is required (FIREBASE_PROJECT_ID or a service account file)"
                    .to_string(),
            );
        }

        validate_http_url(&self.jwks_url, "JWKS URL")?;

        if self.request_timeout == 0 {
            return Err("Key fetch timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
