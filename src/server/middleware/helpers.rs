//! Helper functions for middleware

use crate::utils::error::{GatewayError, Result};
use actix_web::http::header::{AUTHORIZATION, HeaderMap};

const BEARER_PREFIX: &str = "Bearer ";

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// An absent or empty header is [`GatewayError::AuthMissing`]. Anything
/// without the exact, case-sensitive `"Bearer "` prefix, or a value that is
/// not visible ASCII, is [`GatewayError::AuthMalformed`].
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(GatewayError::AuthMissing),
    };

    value
        .to_str()
        .ok()
        .and_then(|auth_str| auth_str.strip_prefix(BEARER_PREFIX))
        .ok_or(GatewayError::AuthMalformed)
}
