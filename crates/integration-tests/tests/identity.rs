mod harness;

use harness::config::ConfigBuilder;
use harness::server::{TestServer, USER_ID};
use weft_core::{ErrorCode, ErrorDetails, ErrorEnvelope};

const DRAFT: &str = r#"{"name": "Nightly sync", "slug": "nightly-sync"}"#;

#[tokio::test]
async fn missing_user_is_unauthorized() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let resp = server
        .client()
        .post(server.url("/v1/workflows/validate"))
        .body(DRAFT)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let envelope: ErrorEnvelope = resp.json().await.unwrap();
    assert_eq!(envelope.error.code, ErrorCode::Unauthorized);
    assert_eq!(envelope.error.message, "authentication required");
}

#[tokio::test]
async fn malformed_user_header_is_validation_error() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let resp = server
        .client()
        .post(server.url("/v1/workflows/validate"))
        .header("x-user-id", "alice")
        .body(DRAFT)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let envelope: ErrorEnvelope = resp.json().await.unwrap();
    assert_eq!(envelope.error.code, ErrorCode::ValidationError);
    assert_eq!(
        envelope.error.details,
        Some(ErrorDetails::Field {
            field: "x-user-id".to_owned()
        })
    );
}

#[tokio::test]
async fn custom_identity_headers_are_honoured() {
    let config = ConfigBuilder::new().with_identity_headers("x-org", "x-subject").build();
    let server = TestServer::start(config).await.unwrap();

    let resp = server
        .client()
        .post(server.url("/v1/workflows/validate"))
        .header("x-subject", USER_ID)
        .body(DRAFT)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn tenant_is_optional() {
    let server = TestServer::start(ConfigBuilder::new().build()).await.unwrap();

    let resp = server
        .client()
        .post(server.url("/v1/workflows/validate"))
        .header("x-user-id", USER_ID)
        .body(DRAFT)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
}
