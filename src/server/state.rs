//! Application state shared across HTTP handlers

use crate::auth::IdentityVerifier;
use crate::config::Config;
use crate::core::traits::ImageProvider;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Built once at startup and read-only afterwards. All fields are `Arc` so
/// each worker gets a cheap clone.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Verifies bearer tokens on protected routes
    pub verifier: Arc<dyn IdentityVerifier>,
    /// Turns prompts into images
    pub provider: Arc<dyn ImageProvider>,
}

impl AppState {
    pub fn new(
        config: Config,
        verifier: Arc<dyn IdentityVerifier>,
        provider: Arc<dyn ImageProvider>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            verifier,
            provider,
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
