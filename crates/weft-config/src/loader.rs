use std::path::Path;

use anyhow::Context as _;
use http::HeaderName;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&raw)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).context("failed to parse config")?;
        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the health path or identity headers are unusable,
    /// the body limit is zero, or the log filter is empty
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_health()?;
        self.validate_identity()?;

        if self.server.max_body_bytes == 0 {
            anyhow::bail!("server.max_body_bytes must be greater than zero");
        }

        if self.logging.filter.trim().is_empty() {
            anyhow::bail!("logging.filter must not be empty");
        }

        Ok(())
    }

    fn validate_health(&self) -> anyhow::Result<()> {
        let health = &self.server.health;
        if !health.enabled {
            return Ok(());
        }

        if !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/', got '{}'", health.path);
        }

        // Captures and wildcards would turn the health check into a pattern route
        let segments = health.path.split('/').skip(1);
        for segment in segments {
            if segment.contains(['{', '}', '*']) || segment.starts_with(':') {
                anyhow::bail!(
                    "server.health.path must be a literal path without route parameters, got '{}'",
                    health.path
                );
            }
        }

        Ok(())
    }

    fn validate_identity(&self) -> anyhow::Result<()> {
        let identity = &self.server.identity;

        let tenant = HeaderName::try_from(identity.tenant_header.as_str())
            .with_context(|| format!("invalid server.identity.tenant_header '{}'", identity.tenant_header))?;
        let user = HeaderName::try_from(identity.user_header.as_str())
            .with_context(|| format!("invalid server.identity.user_header '{}'", identity.user_header))?;

        if tenant == user {
            anyhow::bail!("server.identity tenant_header and user_header must differ");
        }

        Ok(())
    }
}
