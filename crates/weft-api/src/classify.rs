use std::error::Error;

use http::StatusCode;
use weft_core::{ApiError, ErrorCode, ErrorDetails};
use weft_domain::{DomainError, DomainFailure, ErrorClass};
use weft_validation::{FieldError, SchemaValidationErrors};

/// Message sent for any error that matched no rule
pub const INTERNAL_MESSAGE: &str = "internal server error";

/// Message sent alongside aggregated field violations
pub const SCHEMA_MESSAGE: &str = "request validation failed";

/// Order in which domain classes are tried, after the two validation rules
///
/// Changing this order changes user-visible behaviour.
const DOMAIN_PRIORITY: [ErrorClass; 9] = [
    ErrorClass::NotFound,
    ErrorClass::InvalidState,
    ErrorClass::CredentialUnavailable,
    ErrorClass::SlugExists,
    ErrorClass::CodeHidden,
    ErrorClass::Conflict,
    ErrorClass::Validation,
    ErrorClass::Unauthenticated,
    ErrorClass::Forbidden,
];

/// Outcome of classifying one error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Always the status of `error.code`
    pub status: StatusCode,
    /// Client-facing error body
    pub error: ApiError,
    /// Nothing matched; the raw error must stay server-side
    pub internal: bool,
}

impl Classification {
    const fn client(error: ApiError) -> Self {
        Self {
            status: error.code.status(),
            error,
            internal: false,
        }
    }
}

/// Classify an error for the client
///
/// Rules are tried in a fixed order and the first match wins. Each rule
/// looks through the whole `source()` chain, so errors wrapped in context
/// layers are still recognised:
///
/// 1. [`SchemaValidationErrors`] → 400 `SCHEMA_VALIDATION_ERROR`
/// 2. [`FieldError`] → 400 `VALIDATION_ERROR`
/// 3. [`DomainError`] (bare or as a [`DomainFailure`]), by class: not
///    found, invalid state, credential unavailable, slug exists, code
///    hidden, conflict, validation, unauthenticated, forbidden
/// 4. anything else → 500 `INTERNAL_ERROR` with a fixed message
///
/// Rule order beats chain depth: an error deep in the chain that matches an
/// earlier rule wins over a shallower one matching a later rule.
pub fn classify(err: &(dyn Error + 'static)) -> Classification {
    if let Some(schema) = find::<SchemaValidationErrors>(err) {
        let error = ApiError::new(ErrorCode::SchemaValidationError, SCHEMA_MESSAGE).with_details(ErrorDetails::Schema {
            errors: schema.errors.clone(),
        });
        return Classification::client(error);
    }

    if let Some(field) = find::<FieldError>(err) {
        let error = ApiError::new(ErrorCode::ValidationError, field.message.clone()).with_details(ErrorDetails::Field {
            field: field.field.clone(),
        });
        return Classification::client(error);
    }

    for class in DOMAIN_PRIORITY {
        if let Some(domain) = find_domain(err, class) {
            // Domain messages are fixed strings, safe to expose. The
            // wrapper's text is not used as it may carry internal context.
            let error = ApiError::new(code_for(class), domain.to_string());
            return Classification::client(error);
        }
    }

    Classification {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        error: ApiError::new(ErrorCode::InternalError, INTERNAL_MESSAGE),
        internal: true,
    }
}

const fn code_for(class: ErrorClass) -> ErrorCode {
    match class {
        ErrorClass::NotFound => ErrorCode::NotFound,
        ErrorClass::InvalidState => ErrorCode::InvalidState,
        ErrorClass::CredentialUnavailable => ErrorCode::CredentialUnavailable,
        ErrorClass::SlugExists => ErrorCode::SlugExists,
        ErrorClass::CodeHidden => ErrorCode::CodeHidden,
        ErrorClass::Conflict => ErrorCode::Conflict,
        ErrorClass::Validation => ErrorCode::ValidationError,
        ErrorClass::Unauthenticated => ErrorCode::Unauthorized,
        ErrorClass::Forbidden => ErrorCode::Forbidden,
    }
}

pub(crate) fn chain<'a>(err: &'a (dyn Error + 'static)) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    std::iter::successors(Some(err), |&e| e.source())
}

fn find<'a, T: Error + 'static>(err: &'a (dyn Error + 'static)) -> Option<&'a T> {
    chain(err).find_map(|e| e.downcast_ref::<T>())
}

fn find_domain(err: &(dyn Error + 'static), class: ErrorClass) -> Option<DomainError> {
    chain(err)
        .filter_map(|e| {
            e.downcast_ref::<DomainError>()
                .copied()
                .or_else(|| e.downcast_ref::<DomainFailure>().map(DomainFailure::kind))
        })
        .find(|domain| domain.is(class))
}
