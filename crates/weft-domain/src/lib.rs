//! Domain error taxonomy for the workflow API
//!
//! Services return [`DomainError`] values, possibly paired with a cause as
//! a [`DomainFailure`] or wrapped in context layers. The HTTP boundary is
//! the only place that inspects [`DomainError::class`].

mod error;

pub use error::{DomainError, DomainFailure, ErrorClass};
