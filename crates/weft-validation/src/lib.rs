//! Request-level input validation
//!
//! Two separate mechanisms live here and are not interchangeable:
//! [`validate_credential_bindings`] only answers pass or fail, while
//! [`SchemaValidator`] accumulates every field violation it is shown.

mod bindings;
mod field;
mod schema;

pub use bindings::{InvalidCredentialBindings, validate_credential_bindings};
pub use field::FieldError;
pub use schema::{SchemaValidationErrors, SchemaValidator};
