//! Logging setup for Weft
//!
//! Installs a `tracing` subscriber writing text or JSON lines to stdout

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use weft_config::{LogFormat, LoggingConfig};

/// Install the global `tracing` subscriber
///
/// An unparsable filter falls back to `info` with a warning once the
/// subscriber is live.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let (filter, rejected) = build_filter(&config.filter);

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true),
            )
            .try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    if let Some(directive) = rejected {
        tracing::warn!(%directive, "invalid log filter, falling back to info");
    }

    Ok(())
}

/// Parse a filter directive, returning the rejected input on failure
fn build_filter(directive: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(_) => (EnvFilter::new("info"), Some(directive.to_owned())),
    }
}
