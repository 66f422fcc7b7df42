use std::error::Error;
use std::fmt;
use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use http::{HeaderValue, StatusCode, header};
use serde::Serialize;
use weft_core::ErrorCode;

use crate::classify::{Classification, classify};
use crate::sink::{ErrorSink, TracingSink};

/// Writes classified errors as JSON responses
///
/// Cheap to clone; share one instance across handlers.
#[derive(Clone)]
pub struct ErrorClassifier {
    sink: Arc<dyn ErrorSink>,
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new(Arc::new(TracingSink))
    }
}

impl fmt::Debug for ErrorClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorClassifier").finish_non_exhaustive()
    }
}

impl ErrorClassifier {
    pub fn new(sink: Arc<dyn ErrorSink>) -> Self {
        Self { sink }
    }

    /// Build the single response for `err`
    ///
    /// Errors that match no rule are reported to the sink once and answered
    /// with a generic 500 body. Never fails: if the body cannot be encoded
    /// the status is still returned, with an empty body.
    pub fn handle_error(&self, err: &(dyn Error + 'static)) -> Response {
        let Classification { status, error, internal } = classify(err);
        if internal {
            self.sink.unclassified(err);
        }
        let code = error.code;
        self.encode(status, code, &error.into_envelope())
    }

    fn encode(&self, status: StatusCode, code: ErrorCode, body: &impl Serialize) -> Response {
        match serde_json::to_vec(body) {
            Ok(bytes) => (
                status,
                [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                bytes,
            )
                .into_response(),
            Err(e) => {
                self.sink.write_failed(code, &e);
                status.into_response()
            }
        }
    }
}
