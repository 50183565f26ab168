//! Request and response data models

pub mod mockup;

pub use mockup::{GenerateRequest, GenerateResponse};
