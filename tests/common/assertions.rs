//! Custom test assertions

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::test;
use crochet_mockup_api::utils::error::ErrorResponse;

/// Assert the three cross-origin headers are present with their fixed values
pub fn assert_cors_headers<B>(resp: &ServiceResponse<B>) {
    let headers = resp.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).map(|v| v.as_bytes()),
        Some(&b"*"[..])
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).map(|v| v.as_bytes()),
        Some(&b"POST, OPTIONS"[..])
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).map(|v| v.as_bytes()),
        Some(&b"Content-Type, Authorization"[..])
    );
}

/// Assert status and error code, returning the decoded error body
pub async fn assert_error<B: MessageBody>(
    resp: ServiceResponse<B>,
    status: StatusCode,
    code: &str,
) -> ErrorResponse {
    assert_eq!(resp.status(), status);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error.code, code);
    body
}
