//! Shared types for the Weft API surface
//!
//! Holds the wire-level error envelope and the per-request identity context.

mod context;
mod envelope;

pub use context::RequestContext;
pub use envelope::{ApiError, ErrorCode, ErrorDetails, ErrorEnvelope, FieldViolation};
