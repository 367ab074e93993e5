//! Engine error model.

use thiserror::Error;

/// Result type used across the valuation engine.
pub type ValuationResult<T> = Result<T, ValuationError>;

/// Top-level engine error.
///
/// Per-item failures (missing id, store miss, store outage) are contained
/// inside the item resolver and never take this shape. Only failures that
/// leave the engine without a usable output surface here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValuationError {
    /// Configuration is structurally broken (empty key names, missing
    /// strategy fields, non-finite percentages).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The event-item source could not produce the item list.
    #[error("event source failed: {0}")]
    Source(String),

    /// A resolution task failed to complete (e.g. panicked).
    #[error("resolution failed: {0}")]
    Resolution(String),
}

impl ValuationError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    pub fn resolution(msg: impl Into<String>) -> Self {
        Self::Resolution(msg.into())
    }
}
