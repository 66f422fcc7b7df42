use axum::response::Response;
use weft_api::ErrorClassifier;
use weft_domain::DomainError;

/// Answer requests no route serves, including a known path with the wrong method
///
/// Both go through the classifier so the client always gets an envelope.
pub fn route_not_found(errors: &ErrorClassifier) -> Response {
    errors.handle_error(&DomainError::RouteNotFound)
}
