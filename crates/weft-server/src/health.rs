use http::StatusCode;

/// Liveness check; answers whenever the process is serving requests
pub async fn health_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
