//! HTTP middleware implementations
//!
//! - CORS handling and method gating
//! - Bearer token authentication

mod auth;
mod helpers;
mod security;


// Re-export all middleware
pub use auth::{AuthMiddleware, AuthMiddlewareService};
pub use helpers::extract_bearer_token;
pub use security::{CorsMiddleware, CorsMiddlewareService, apply_cors_headers};
