use std::error::Error;

use weft_core::ErrorCode;

use crate::classify::chain;

/// Destination for errors that must stay server-side
///
/// Injected into [`ErrorClassifier`](crate::ErrorClassifier) so callers can
/// route or capture these records.
pub trait ErrorSink: Send + Sync {
    /// An error matched no classification rule and was answered with 500
    fn unclassified(&self, error: &(dyn Error + 'static));

    /// The response body could not be encoded after the status was chosen
    fn write_failed(&self, code: ErrorCode, error: &serde_json::Error);
}

/// Sink that emits `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn unclassified(&self, error: &(dyn Error + 'static)) {
        let sources: Vec<String> = chain(error).skip(1).map(ToString::to_string).collect();
        tracing::error!(error = %error, ?sources, "unclassified error returned to client as internal error");
    }

    fn write_failed(&self, code: ErrorCode, error: &serde_json::Error) {
        tracing::error!(%code, error = %error, "failed to encode error response body");
    }
}
