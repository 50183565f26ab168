//! Gemini Error Handling

use crate::core::providers::unified_provider::ProviderError;

pub const PROVIDER_NAME: &str = "gemini";

/// Maps Gemini HTTP failures onto [`ProviderError`]
pub struct GeminiErrorMapper;

impl GeminiErrorMapper {
    pub fn from_http_status(status: u16, body: &str) -> ProviderError {
        match status {
            401 => ProviderError::authentication(PROVIDER_NAME, "Invalid or missing API key"),
            403 => ProviderError::authentication(PROVIDER_NAME, "Forbidden: insufficient permissions"),
            429 => ProviderError::rate_limit(PROVIDER_NAME, Self::extract_retry_after(body)),
            500..=599 => {
                ProviderError::api_error(PROVIDER_NAME, status, format!("Server error: {}", body))
            }
            _ => ProviderError::api_error(PROVIDER_NAME, status, body),
        }
    }

    /// Map a transport failure, distinguishing timeouts. The request URL
    /// carries the API key and is stripped from the message.
    pub fn from_reqwest(err: reqwest::Error) -> ProviderError {
        let err = err.without_url();
        if err.is_timeout() {
            ProviderError::timeout(PROVIDER_NAME, err.to_string())
        } else {
            ProviderError::network(PROVIDER_NAME, err.to_string())
        }
    }

    fn extract_retry_after(body: &str) -> Option<u64> {
        let json: serde_json::Value = serde_json::from_str(body).ok()?;
        json.get("error")
            .and_then(|error| error.get("retry_after"))
            .or_else(|| json.get("retry_after"))
            .and_then(|value| value.as_u64())
    }
}

pub fn gemini_config_error(msg: impl Into<String>) -> ProviderError {
    ProviderError::configuration(PROVIDER_NAME, msg)
}

pub fn gemini_parse_error(msg: impl Into<String>) -> ProviderError {
    ProviderError::response_parsing(PROVIDER_NAME, msg)
}
