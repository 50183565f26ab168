//! mockup-server - crochet mockup generation backend

#![allow(missing_docs)]

use clap::Parser;
use crochet_mockup_api::config::CliArgs;
use crochet_mockup_api::server;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match server::run_server(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
