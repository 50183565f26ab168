//! Command line arguments

use clap::Parser;
use std::path::PathBuf;

/// Crochet mockup generation backend
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "mockup-server", version, about)]
pub struct CliArgs {
    /// YAML configuration file; when absent the environment is used
    #[arg(long, short = 'c', env = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Listening port, overrides the file and the environment
    #[arg(long, short = 'p')]
    pub port: Option<u16>,
}
