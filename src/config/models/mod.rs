//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

pub mod auth;
pub mod logging;
pub mod provider;
pub mod server;

// Re-export all configuration types
pub use auth::*;
pub use logging::*;
pub use provider::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default name used by the root greeting
pub fn default_greeting_name() -> String {
    "World".to_string()
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

pub fn default_jwks_url() -> String {
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com"
        .to_string()
}

pub fn default_issuer_base() -> String {
    "https://securetoken.google.com/".to_string()
}

/// Default outbound request timeout in seconds
pub fn default_request_timeout() -> u64 {
    60
}

/// Default timeout for the signing key fetch in seconds
pub fn default_key_fetch_timeout() -> u64 {
    10
}

/// Default outbound connect timeout in seconds
pub fn default_connect_timeout() -> u64 {
    10
}

pub fn default_gemini_model() -> String {
    "gemini-2.0-flash-preview-image-generation".to_string()
}

pub fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

pub fn default_gemini_api_version() -> String {
    "v1beta".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}
