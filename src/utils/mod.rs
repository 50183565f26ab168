//! Utility modules for the mockup service
//!
//! - **error**: the service-wide error type and its HTTP mapping
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;
