//! Authentication types

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Identity established for a single request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedIdentity {
    /// Provider-assigned user id (`sub` claim)
    pub subject_id: String,
    /// Email claim, empty when the token carries none
    pub email: String,
    /// `email_verified` claim, false when absent
    pub email_verified: bool,
}

/// Why a token was rejected.
///
/// The variants exist for the server log; every one of them is reported to
/// the client as the same 401.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("malformed token: {0}")]
    MalformedToken(#[source] jsonwebtoken::errors::Error),

    #[error("unsupported signing algorithm {0}")]
    UnsupportedAlgorithm(String),

    #[error("token header has no key id")]
    MissingKeyId,

    #[error("no signing key matches key id {0}")]
    UnknownKeyId(String),

    #[error("failed to fetch signing keys: {0}")]
    KeyFetch(String),

    #[error("signing key is unusable: {0}")]
    InvalidKey(#[source] jsonwebtoken::errors::Error),

    #[error("invalid token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    #[error("token issued in the future")]
    IssuedInFuture,

    #[error("token has an empty subject")]
    EmptySubject,
}

/// Checks bearer tokens against an identity provider
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verify `token` and return the identity it proves. One attempt, no retry.
    async fn verify(&self, token: &str) -> Result<AuthenticatedIdentity, AuthError>;
}
