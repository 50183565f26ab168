//! Caller authentication
//!
//! Protected routes carry a Firebase ID token as a bearer credential. The
//! [`IdentityVerifier`] trait is the seam between the HTTP layer and the
//! identity provider; [`FirebaseTokenVerifier`] is the production
//! implementation.

pub mod jwt;
pub mod types;

pub use jwt::FirebaseTokenVerifier;
pub use types::{AuthError, AuthenticatedIdentity, IdentityVerifier};

use crate::config::AuthConfig;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

/// Build the verifier used for the process lifetime
pub fn create_identity_verifier(config: &AuthConfig) -> Result<Arc<dyn IdentityVerifier>> {
    let verifier = FirebaseTokenVerifier::new(config)?;
    info!(
        "Verifying ID tokens for project {} (issuer {})",
        config.project_id,
        config.issuer()
    );
    Ok(Arc::new(verifier))
}
