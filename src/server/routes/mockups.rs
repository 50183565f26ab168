//! Mockup generation endpoint

use crate::auth::AuthenticatedIdentity;
use crate::core::models::{GenerateRequest, GenerateResponse};
use crate::core::prompt::build_prompt;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::{HttpResponse, web};
use tracing::{debug, error, warn};

/// `POST /generateMockups`
///
/// Runs behind [`AuthMiddleware`](crate::server::middleware::AuthMiddleware).
/// Parse, validate, prompt, generate, encode; the first failing step decides
/// the status.
pub async fn generate_mockups(
    state: web::Data<AppState>,
    identity: AuthenticatedIdentity,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let request = GenerateRequest::parse(&body).inspect_err(|e| {
        warn!(subject_id = %identity.subject_id, "Rejected request body: {}", e);
    })?;

    request.validate().inspect_err(|e| {
        warn!(subject_id = %identity.subject_id, "{}", e);
    })?;

    let prompt = build_prompt(&request);
    debug!(subject_id = %identity.subject_id, provider = state.provider.name(), "Generating mockups");

    let images = state.provider.generate_images(&prompt).await.map_err(|e| {
        error!(subject_id = %identity.subject_id, provider = e.provider(), "Error generating images: {}", e);
        GatewayError::Generation(e)
    })?;

    let payload = serde_json::to_vec(&GenerateResponse { images }).map_err(|e| {
        error!(subject_id = %identity.subject_id, "Error encoding response: {}", e);
        GatewayError::ResponseEncode(e)
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(payload))
}
