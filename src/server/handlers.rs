//! Unauthenticated route handlers

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};

/// `/` greeting, any method
pub async fn greeting(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(format!("Hello {}!\n", state.config.server.greeting_name))
}

/// Fallback for every unrouted path
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain; charset=utf-8")
        .body("404 page not found\n")
}
