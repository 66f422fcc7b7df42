use std::net::SocketAddr;

use serde::Deserialize;

use crate::{health::HealthConfig, identity::IdentityConfig};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    /// Largest request body accepted, in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: None,
            max_body_bytes: default_max_body_bytes(),
            health: HealthConfig::default(),
            identity: IdentityConfig::default(),
        }
    }
}

const fn default_max_body_bytes() -> usize {
    2 * 1024 * 1024
}
