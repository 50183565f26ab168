//! End-to-end tests for crochet-mockup-api
//!
//! These tests call the real Gemini API and require an API key.
//! Run with: cargo test -- --ignored
//!
//! Required environment variables:
//! - GEMINI_API_KEY: For Gemini tests

pub mod gemini;
