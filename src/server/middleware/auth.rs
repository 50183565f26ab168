//! Authentication middleware

use crate::auth::AuthenticatedIdentity;
use crate::server::AppState;
use crate::server::middleware::helpers::extract_bearer_token;
use crate::utils::error::GatewayError;
use actix_web::body::EitherBody;
use actix_web::dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use tracing::{error, info, warn};

/// Auth middleware for Actix-web
///
/// Verifies the bearer token with [`AppState::verifier`] and stores the
/// resulting [`AuthenticatedIdentity`] in the request extensions. Rejected
/// requests get a 401 and never reach the wrapped service.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

/// Service implementation for auth middleware
pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = match extract_bearer_token(req.headers()) {
            Ok(token) => token.to_string(),
            Err(err) => {
                warn!("{}", err);
                return Box::pin(async move { Ok(req.error_response(err).map_into_right_body()) });
            }
        };

        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                error!("Application state missing, cannot verify token");
                let err = GatewayError::server("application state not registered");
                return Ok(req.error_response(err).map_into_right_body());
            };

            match state.verifier.verify(&token).await {
                Ok(identity) => {
                    info!(
                        "Authenticated request from user: {} (email: {})",
                        identity.subject_id, identity.email
                    );
                    req.extensions_mut().insert(identity);
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                Err(e) => {
                    warn!("Token verification failed: {}", e);
                    Ok(req
                        .error_response(GatewayError::AuthInvalid(e))
                        .map_into_right_body())
                }
            }
        })
    }
}

/// Handlers take the identity as a parameter. It is only present once
/// [`AuthMiddleware`] has run; without it the request fails with a 500.
impl FromRequest for AuthenticatedIdentity {
    type Error = GatewayError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let identity = req.extensions().get::<AuthenticatedIdentity>().cloned();
        if identity.is_none() {
            error!("Authenticated identity missing from request context");
        }
        ready(identity.ok_or(GatewayError::AuthContextMissing))
    }
}
