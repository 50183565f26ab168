//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::auth::create_identity_verifier;
use crate::config::{Config, ServerConfig};
use crate::core::providers::create_image_provider;
use crate::server::handlers::{greeting, not_found};
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::{App, HttpServer as ActixHttpServer, web};
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Build the verifier and image provider from `config`
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let verifier = create_identity_verifier(&config.auth)?;
        let provider = create_image_provider(&config.image_provider)?;
        let state = AppState::new(config.clone(), verifier, provider);

        Ok(Self::from_state(state))
    }

    /// Wrap an already assembled state
    pub fn from_state(state: AppState) -> Self {
        Self {
            config: state.config.server.clone(),
            state,
        }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let payload_limit = state.config.server.max_body_size;

        App::new()
            .app_data(state)
            .app_data(web::PayloadConfig::new(payload_limit))
            .wrap(TracingLogger::default())
            .route("/", web::to(greeting))
            .configure(routes::configure_routes)
            .default_service(web::to(not_found))
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;

        let state = web::Data::new(self.state);

        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone()));
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr, port))?
            .run();

        info!("listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Turn a bind failure into an error that names the address
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> GatewayError {
        match error.kind() {
            std::io::ErrorKind::AddrInUse => GatewayError::server(format!(
                "Port {} is already in use on {}. Free it or start with --port {} / PORT={}",
                port,
                bind_addr,
                port.saturating_add(1),
                port.saturating_add(1)
            )),
            std::io::ErrorKind::PermissionDenied => GatewayError::server(format!(
                "Permission denied binding {}. Ports below 1024 need elevated privileges",
                bind_addr
            )),
            _ => GatewayError::server(format!("Failed to bind {}: {}", bind_addr, error)),
        }
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
