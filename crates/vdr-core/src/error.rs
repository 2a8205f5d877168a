//! # Error Types
//!
//! Shared error types for the requirements engine. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! The resolution pipeline itself recovers from malformed external data
//! locally (fail-closed predicates, `unknown` canonical values); these
//! types cover the constructor-level validation that happens before data
//! enters the pipeline.

use thiserror::Error;

/// Top-level error type for the foundational crate.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A country code failed structural validation.
    #[error("invalid country code: {0:?}")]
    InvalidCountryCode(String),
}
