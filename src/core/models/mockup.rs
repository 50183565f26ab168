//! Mockup request and response bodies

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};

/// Body of `POST /generateMockups`.
///
/// Absent fields decode as empty strings so that a missing field and an
/// empty one are both reported by [`GenerateRequest::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateRequest {
    pub project_description: String,
    pub color_vibe: String,
    /// "monochrome", "2-4", "5-7" or free text
    pub color_count: String,
}

impl GenerateRequest {
    /// Decode a raw request body
    pub fn parse(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(GatewayError::BodyParse)
    }

    /// All three fields must be non-empty
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("projectDescription", &self.project_description),
            ("colorVibe", &self.color_vibe),
            ("colorCount", &self.color_count),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(GatewayError::validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}

/// Successful response: an ordered list of image data URLs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub images: Vec<String>,
}
