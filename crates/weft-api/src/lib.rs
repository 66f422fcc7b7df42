//! Error classification for the HTTP boundary
//!
//! [`classify`] maps any error to an [`ApiError`](weft_core::ApiError) through
//! a fixed priority chain. [`ErrorClassifier`] turns that into exactly one
//! HTTP response and reports unrecognised errors to an [`ErrorSink`].

mod classify;
mod respond;
mod sink;

pub use classify::{Classification, INTERNAL_MESSAGE, SCHEMA_MESSAGE, classify};
pub use respond::ErrorClassifier;
pub use sink::{ErrorSink, TracingSink};
