//! Firebase ID token verification
//!
//! ID tokens are RS256 JWTs signed with keys the provider publishes as a JWK
//! set. Verification fetches that set, picks the key named by the token's
//! `kid` and checks signature, expiry, audience and issuer.

mod handler;
pub mod types;

pub use types::{FirebaseClaims, FirebaseTokenVerifier};
