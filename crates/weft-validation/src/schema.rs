use std::error::Error as StdError;

use thiserror::Error;
use weft_core::FieldViolation;

/// Every field violation found while validating one request body
///
/// Order is the order in which violations were discovered.
#[derive(Debug, Error)]
#[error("request failed schema validation with {} error(s)", .errors.len())]
pub struct SchemaValidationErrors {
    pub errors: Vec<FieldViolation>,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl SchemaValidationErrors {
    #[must_use]
    pub const fn new(errors: Vec<FieldViolation>) -> Self {
        Self { errors, source: None }
    }

    /// Attach the failure that triggered this validation pass
    #[must_use]
    pub fn caused_by(mut self, source: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Accumulates field violations across a whole request body
///
/// Unlike a fail-fast check, every rule is evaluated so the client sees all
/// problems in one response.
#[derive(Debug, Default)]
pub struct SchemaValidator {
    violations: Vec<FieldViolation>,
}

impl SchemaValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation unconditionally
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.violations.push(FieldViolation::new(field, message));
        self
    }

    /// Record `message` against `field` when `ok` is false
    pub fn check(&mut self, field: &str, ok: bool, message: &str) -> &mut Self {
        if !ok {
            self.push(field, message);
        }
        self
    }

    /// Record a `required` violation when the value is missing or blank
    pub fn require(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        let present = value.is_some_and(|v| !v.trim().is_empty());
        self.check(field, present, "required")
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Finish validation
    ///
    /// # Errors
    ///
    /// Returns [`SchemaValidationErrors`] holding every recorded violation,
    /// in recording order, if there was at least one.
    pub fn finish(self) -> Result<(), SchemaValidationErrors> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaValidationErrors::new(self.violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_violations_passes() {
        let mut validator = SchemaValidator::new();
        validator.require("name", Some("deploy")).check("age", true, "must be integer");
        assert!(validator.finish().is_ok());
    }

    #[test]
    fn violations_keep_discovery_order() {
        let mut validator = SchemaValidator::new();
        validator
            .require("email", None)
            .check("age", false, "must be integer")
            .require("name", Some("ok"));

        let err = validator.finish().unwrap_err();
        assert_eq!(
            err.errors,
            vec![
                FieldViolation::new("email", "required"),
                FieldViolation::new("age", "must be integer"),
            ]
        );
        assert_eq!(err.to_string(), "request failed schema validation with 2 error(s)");
    }

    #[test]
    fn blank_values_count_as_missing() {
        let mut validator = SchemaValidator::new();
        validator.require("name", Some("   "));
        assert!(!validator.is_empty());
    }
}
