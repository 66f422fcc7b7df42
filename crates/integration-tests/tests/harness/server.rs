//! Test server wrapper that starts Weft on a random port

use std::net::SocketAddr;

use tokio_util::sync::CancellationToken;
use weft_config::Config;
use weft_server::Server;

/// Fixed identities used by requests that should pass the identity gate
pub const TENANT_ID: &str = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";
pub const USER_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a test server with the given configuration
    ///
    /// Binds to port 0 for automatic port assignment
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let server = Server::new(&config)?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, server.into_router())
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self {
            addr,
            shutdown,
            client: reqwest::Client::new(),
        })
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// POST a raw body with a full default identity
    pub async fn post_authenticated(&self, path: &str, body: &str) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .header("x-tenant-id", TENANT_ID)
            .header("x-user-id", USER_ID)
            .header("content-type", "application/json")
            .body(body.to_owned())
            .send()
            .await
            .expect("request should reach the test server")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
