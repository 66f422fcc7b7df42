//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use weft_config::{Config, HealthConfig, IdentityConfig, ServerConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    identity: IdentityConfig::default(),
                    ..ServerConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Read identity from custom header names
    pub fn with_identity_headers(mut self, tenant: &str, user: &str) -> Self {
        self.config.server.identity = IdentityConfig {
            tenant_header: tenant.to_owned(),
            user_header: user.to_owned(),
        };
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Serve health checks on a different path
    pub fn with_health_path(mut self, path: &str) -> Self {
        self.config.server.health.path = path.to_owned();
        self
    }

    /// Cap request bodies at `bytes`
    pub fn with_max_body_bytes(mut self, bytes: usize) -> Self {
        self.config.server.max_body_bytes = bytes;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
