#![allow(clippy::must_use_candidate)]

mod env;
pub mod health;
pub mod identity;
mod loader;
pub mod logging;
pub mod server;

use serde::Deserialize;

pub use health::*;
pub use identity::*;
pub use logging::*;
pub use server::*;

/// Top-level Weft configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Log output configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
