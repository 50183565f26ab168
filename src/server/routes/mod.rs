//! HTTP route modules

pub mod mockups;

use crate::server::middleware::{AuthMiddleware, CorsMiddleware};
use actix_web::web;

pub use mockups::generate_mockups;

/// Register the authenticated generation resource.
///
/// `CorsMiddleware` is wrapped last so it runs first.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/generateMockups")
            .route(web::post().to(generate_mockups))
            .wrap(AuthMiddleware)
            .wrap(CorsMiddleware),
    );
}
