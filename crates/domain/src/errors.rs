//! Error types raised while building or decoding domain values

use thiserror::Error;

/// Domain-level validation and decode failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// An action element carried a `type` discriminator this crate does not
    /// know. Only raised by the strict decoders.
    #[error("unknown destination filter action kind: {0}")]
    UnknownActionKind(String),

    #[error("sample percent must be within [0.0, 1.0], got {0}")]
    InvalidSamplePercent(f64),

    #[error("malformed destination filter action: {0}")]
    MalformedAction(String),
}

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, DomainError>;
