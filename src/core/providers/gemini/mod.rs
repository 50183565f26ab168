//! Google Gemini image generation
//!
//! Calls `generateContent` on Google AI Studio with image output enabled and
//! turns the inline image parts into PNG data URLs.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;

// Re-export main types
pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::GeminiErrorMapper;
pub use provider::GeminiImageProvider;
