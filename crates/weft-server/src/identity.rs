use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use http::HeaderName;
use uuid::Uuid;
use weft_api::ErrorClassifier;
use weft_core::RequestContext;
use weft_domain::DomainError;
use weft_validation::FieldError;

/// Header names identity is read from, parsed once at startup
#[derive(Debug, Clone)]
pub struct IdentityHeaders {
    pub tenant: HeaderName,
    pub user: HeaderName,
}

/// Middleware that attaches a `RequestContext` built from identity headers
///
/// Missing headers leave the matching field empty. A header that is present
/// but not a UUID rejects the request as a validation error on that header.
pub async fn identity_middleware(
    headers: IdentityHeaders,
    errors: ErrorClassifier,
    request: Request,
    next: Next,
) -> Response {
    let context = match extract_context(&headers, &request) {
        Ok(context) => context,
        Err(e) => return errors.handle_error(&e),
    };

    let mut request = request;
    request.extensions_mut().insert(context);
    next.run(request).await
}

/// Middleware that rejects requests carrying no user identity
pub async fn require_user(errors: ErrorClassifier, request: Request, next: Next) -> Response {
    let authenticated = request
        .extensions()
        .get::<RequestContext>()
        .is_some_and(RequestContext::is_authenticated);

    if !authenticated {
        tracing::debug!(path = %request.uri().path(), "rejecting request without user identity");
        return errors.handle_error(&DomainError::Unauthenticated);
    }

    next.run(request).await
}

fn extract_context(headers: &IdentityHeaders, request: &Request) -> Result<RequestContext, FieldError> {
    Ok(RequestContext {
        tenant_id: header_uuid(request, &headers.tenant)?,
        user_id: header_uuid(request, &headers.user)?,
    })
}

fn header_uuid(request: &Request, name: &HeaderName) -> Result<Option<Uuid>, FieldError> {
    let Some(value) = request.headers().get(name) else {
        return Ok(None);
    };

    value
        .to_str()
        .ok()
        .and_then(|v| Uuid::try_parse(v.trim()).ok())
        .map(Some)
        .ok_or_else(|| FieldError::new(name.as_str(), format!("{name} header must be a valid UUID")))
}
