//! Error handling for the mockup service
//!
//! Every failure a request or the startup path can hit is a `GatewayError`.
//! The HTTP mapping lives in the `ResponseError` impl below; clients only
//! ever see a fixed message per kind, the cause stays in the server log.

use crate::auth::AuthError;
use crate::core::providers::unified_provider::ProviderError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the service
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the service
#[derive(Error, Debug)]
pub enum GatewayError {
    /// No `Authorization` header on a protected route
    #[error("Authorization header required")]
    AuthMissing,

    /// `Authorization` header present but not `Bearer <token>`
    #[error("Invalid authorization header format")]
    AuthMalformed,

    /// The identity provider rejected the token
    #[error("Token verification failed: {0}")]
    AuthInvalid(#[from] AuthError),

    /// Request body is not a JSON `GenerateRequest`
    #[error("Invalid request body: {0}")]
    BodyParse(#[source] serde_json::Error),

    /// Request body decoded but a required field is empty
    #[error("Validation error: {0}")]
    Validation(String),

    /// Method outside the allowed set for the route
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Handler ran without an identity attached by the auth middleware
    #[error("Authentication context missing from request")]
    AuthContextMissing,

    /// Image provider failed
    #[error("Image generation failed: {0}")]
    Generation(#[from] ProviderError),

    /// Response could not be serialized
    #[error("Failed to encode response: {0}")]
    ResponseEncode(#[source] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Server lifecycle errors (bind, run)
    #[error("Server error: {0}")]
    Server(String),
}

impl GatewayError {
    /// Stable machine-readable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::AuthMissing => "AUTH_MISSING",
            GatewayError::AuthMalformed => "AUTH_MALFORMED",
            GatewayError::AuthInvalid(_) => "AUTH_INVALID",
            GatewayError::BodyParse(_) => "INVALID_BODY",
            GatewayError::Validation(_) => "VALIDATION_ERROR",
            GatewayError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            GatewayError::AuthContextMissing => "AUTH_CONTEXT_MISSING",
            GatewayError::Generation(_) => "GENERATION_FAILED",
            GatewayError::ResponseEncode(_) => "ENCODE_FAILED",
            GatewayError::Config(_) => "CONFIG_ERROR",
            GatewayError::Yaml(_) => "CONFIG_ERROR",
            GatewayError::Server(_) => "SERVER_ERROR",
        }
    }

    /// Message safe to hand to the client
    pub fn public_message(&self) -> &'static str {
        match self {
            GatewayError::AuthMissing => "Authorization header required",
            GatewayError::AuthMalformed => "Invalid authorization header format",
            GatewayError::AuthInvalid(_) => "Invalid or expired token",
            GatewayError::BodyParse(_) => "Invalid request body",
            GatewayError::Validation(_) => {
                "Missing required fields: projectDescription, colorVibe, colorCount"
            }
            GatewayError::MethodNotAllowed => "Method not allowed",
            GatewayError::Generation(_) => "Failed to generate images",
            _ => "Internal server error",
        }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::AuthMissing
            | GatewayError::AuthMalformed
            | GatewayError::AuthInvalid(_) => StatusCode::UNAUTHORIZED,
            GatewayError::BodyParse(_) | GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.public_message().to_string(),
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}
