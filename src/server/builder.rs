//! Process startup
//!
//! Loads configuration, installs logging and runs the server until it stops.

use std::path::{Path, PathBuf};

use crate::config::{CliArgs, Config};
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use crate::utils::logging::init_logging;
use tracing::{debug, info, warn};

/// Outcome of reading `.env` from the working directory
#[derive(Debug, PartialEq)]
enum DotenvStatus {
    Loaded(PathBuf),
    Missing,
    Invalid(String),
}

impl DotenvStatus {
    fn from_result(result: std::result::Result<PathBuf, dotenvy::Error>) -> Self {
        match result {
            Ok(path) => Self::Loaded(path),
            Err(e) if e.not_found() => Self::Missing,
            Err(e) => Self::Invalid(e.to_string()),
        }
    }

    fn log(&self) {
        match self {
            Self::Loaded(path) => debug!("Loaded environment from {}", path.display()),
            Self::Missing => info!("No .env file found, using system environment variables"),
            Self::Invalid(e) => warn!("Ignoring unreadable .env file: {}", e),
        }
    }
}

fn config_source(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "environment variables".to_string(),
    }
}

/// Run the server with configuration from `args`, the environment and `.env`
pub async fn run_server(args: CliArgs) -> Result<()> {
    let dotenv = DotenvStatus::from_result(dotenvy::dotenv());

    // The subscriber is built from the loaded config; nothing is logged before it.
    let mut config = Config::load(args.config.as_deref()).await?;
    config.apply_cli(&args);
    config.validate()?;

    init_logging(&config.logging)?;
    dotenv.log();
    info!("Configuration loaded from {}", config_source(args.config.as_deref()));

    info!("starting server...");
    info!("Using image generator: {}", config.image_provider.kind);

    let server = HttpServer::new(&config)?;
    server.start().await
}
