use std::error::Error as StdError;

use thiserror::Error;

/// A single request field failed validation
///
/// The message is written for API consumers and is surfaced verbatim.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
    /// Lower-level failure behind the rejection, kept for server-side logs
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Attach the failure that caused this field to be rejected
    #[must_use]
    pub fn caused_by(mut self, source: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        self.source = Some(source.into());
        self
    }
}
