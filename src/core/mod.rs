//! Core functionality for the service
//!
//! Request models, prompt construction and the image providers.

pub mod models;
pub mod prompt;
pub mod providers;
pub mod traits;
