use std::sync::OnceLock;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Extension, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use thiserror::Error;
use weft_api::ErrorClassifier;
use weft_core::RequestContext;
use weft_validation::{FieldError, SchemaValidationErrors, SchemaValidator, validate_credential_bindings};

const NAME_MAX_CHARS: usize = 255;
const DESCRIPTION_MAX_CHARS: usize = 2000;

/// Workflow definition as submitted by a client, before persistence
#[derive(Debug, Deserialize)]
struct WorkflowDraft {
    name: Option<String>,
    slug: Option<String>,
    description: Option<String>,
    /// Kept raw; only the bindings validator interprets it
    credential_bindings: Option<Box<RawValue>>,
}

#[derive(Debug, Serialize)]
struct DraftAccepted {
    valid: bool,
}

#[derive(Debug, Error)]
enum DraftRejected {
    #[error("request body is not a valid workflow draft")]
    Body(#[source] FieldError),
    #[error("workflow draft failed schema validation")]
    Schema(#[from] SchemaValidationErrors),
    #[error("workflow draft has invalid credential bindings")]
    Bindings(#[source] FieldError),
}

/// Handle `POST /v1/workflows/validate`
///
/// A body that cannot be read, for instance one over the size limit, is a
/// validation error on `body` like any other undecodable draft.
pub async fn validate_draft(
    State(errors): State<ErrorClassifier>,
    Extension(context): Extension<RequestContext>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let outcome = body.map_err(unreadable_body).and_then(|body| check_draft(&body));
    match outcome {
        Ok(()) => {
            tracing::debug!(tenant_id = ?context.tenant_id, "workflow draft accepted");
            Json(DraftAccepted { valid: true }).into_response()
        }
        Err(e) => errors.handle_error(&e),
    }
}

fn unreadable_body(rejection: BytesRejection) -> DraftRejected {
    tracing::debug!(status = %rejection.status(), "rejecting unreadable request body");
    DraftRejected::Body(FieldError::new("body", "request body could not be read").caused_by(rejection))
}

fn check_draft(body: &[u8]) -> Result<(), DraftRejected> {
    let draft: WorkflowDraft = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "rejecting undecodable workflow draft");
        DraftRejected::Body(FieldError::new("body", "request body must be a JSON workflow draft").caused_by(e))
    })?;

    let mut schema = SchemaValidator::new();
    schema.require("name", draft.name.as_deref());
    if let Some(name) = &draft.name {
        schema.check(
            "name",
            name.chars().count() <= NAME_MAX_CHARS,
            "must be at most 255 characters",
        );
    }
    schema.require("slug", draft.slug.as_deref());
    if let Some(slug) = draft.slug.as_deref().filter(|s| !s.is_empty()) {
        schema.check("slug", slug_pattern().is_match(slug), "must be lowercase kebab-case");
    }
    if let Some(description) = &draft.description {
        schema.check(
            "description",
            description.chars().count() <= DESCRIPTION_MAX_CHARS,
            "must be at most 2000 characters",
        );
    }
    schema.finish()?;

    let raw_bindings = draft.credential_bindings.as_deref().map(|raw| raw.get().as_bytes());
    validate_credential_bindings(raw_bindings).map_err(|e| {
        tracing::debug!(error = %e, "rejecting credential bindings");
        DraftRejected::Bindings(
            FieldError::new("credential_bindings", "must map binding names to credential ids or empty strings")
                .caused_by(e),
        )
    })?;

    Ok(())
}

fn slug_pattern() -> &'static Regex {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("must be valid regex"))
}
