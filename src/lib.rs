//! # crochet-mockup-api
//!
//! HTTP backend that turns a short description of a crochet project into a
//! gallery of generated mockup images.
//!
//! A request to `POST /generateMockups` carries a Firebase ID token and a
//! small JSON body. The token is verified against Google's published signing
//! keys, the body is turned into an image prompt, and the configured
//! [`ImageProvider`](core::traits::ImageProvider) returns the images as
//! `data:image/png;base64,...` URLs.
//!
//! ## Running
//!
//! ```rust,no_run
//! use crochet_mockup_api::{Config, server::HttpServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/config.yaml").await?;
//!     HttpServer::new(&config)?.start().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

pub use auth::{AuthenticatedIdentity, IdentityVerifier};
pub use crate::core::models::{GenerateRequest, GenerateResponse};
pub use crate::core::providers::{ProviderError, create_image_provider};
pub use crate::core::traits::ImageProvider;

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
