mod fallback;
mod health;
mod identity;
mod workflows;

use std::net::SocketAddr;

use anyhow::Context as _;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use http::HeaderName;
use tower_http::trace::TraceLayer;
use weft_api::ErrorClassifier;
use weft_config::Config;

use crate::identity::IdentityHeaders;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration, logging unclassified errors via `tracing`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Self::with_classifier(config, ErrorClassifier::default())
    }

    /// Build the server with a caller-supplied error classifier
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation, e.g. invalid
    /// identity header names or a health path with route syntax
    pub fn with_classifier(config: &Config, errors: ErrorClassifier) -> anyhow::Result<Self> {
        config.validate()?;

        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let identity = &config.server.identity;
        let headers = IdentityHeaders {
            tenant: HeaderName::try_from(identity.tenant_header.as_str()).context("invalid tenant identity header")?,
            user: HeaderName::try_from(identity.user_header.as_str()).context("invalid user identity header")?,
        };

        // Versioned API routes require an authenticated user. Route layers
        // only wrap matched routes, so unmatched paths reach the fallback.
        let require_user = errors.clone();
        let api = Router::new()
            .route("/v1/workflows/validate", axum::routing::post(workflows::validate_draft))
            .with_state(errors.clone())
            .route_layer(axum::middleware::from_fn(move |req, next| {
                let errors = require_user.clone();
                async move { identity::require_user(errors, req, next).await }
            }));

        // Identity is added last so it runs before the user gate
        let identity_errors = errors.clone();
        let mut app = Router::new()
            .merge(api)
            .route_layer(axum::middleware::from_fn(move |req, next| {
                let headers = headers.clone();
                let errors = identity_errors.clone();
                async move { identity::identity_middleware(headers, errors, req, next).await }
            }));

        // Health sits outside the identity layer so health checks never need headers
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Must follow every route so each method router gets the fallback
        let unmatched = errors.clone();
        let wrong_method = errors;
        app = app
            .fallback(move || {
                let errors = unmatched.clone();
                async move { fallback::route_not_found(&errors) }
            })
            .method_not_allowed_fallback(move || {
                let errors = wrong_method.clone();
                async move { fallback::route_not_found(&errors) }
            })
            .layer(DefaultBodyLimit::max(config.server.max_body_bytes))
            .layer(TraceLayer::new_for_http());

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Override the listen address
    #[must_use]
    pub fn with_listen_address(mut self, listen_address: SocketAddr) -> Self {
        self.listen_address = listen_address;
        self
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address)
            .await
            .with_context(|| format!("failed to bind {}", self.listen_address))?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
