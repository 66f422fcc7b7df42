use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Weft workflow API server
#[derive(Debug, Parser)]
#[command(name = "weft", about = "Workflow orchestration API server")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "weft.toml", env = "WEFT_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "WEFT_LISTEN")]
    pub listen: Option<SocketAddr>,
}
