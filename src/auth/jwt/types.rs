//! ID token verifier types

use crate::auth::types::{AuthError, AuthenticatedIdentity};
use serde::{Deserialize, Serialize};

/// Verifies Firebase ID tokens against the published key set
#[derive(Debug, Clone)]
pub struct FirebaseTokenVerifier {
    pub(super) http_client: reqwest::Client,
    pub(super) jwks_url: String,
    pub(super) project_id: String,
    pub(super) issuer: String,
}

/// Claims read from a verified ID token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirebaseClaims {
    /// Subject (Firebase uid)
    pub sub: String,
    /// Audience (project id)
    pub aud: String,
    /// Issuer
    pub iss: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: Option<bool>,
}

impl FirebaseClaims {
    /// Turn verified claims into the request identity
    pub fn into_identity(self) -> Result<AuthenticatedIdentity, AuthError> {
        if self.sub.trim().is_empty() {
            return Err(AuthError::EmptySubject);
        }

        Ok(AuthenticatedIdentity {
            subject_id: self.sub,
            email: self.email.unwrap_or_default(),
            email_verified: self.email_verified.unwrap_or(false),
        })
    }
}
