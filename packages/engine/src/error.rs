//! Error types for the engine.
//!
//! The core computation is total: malformed documents degrade to empty
//! strings and the grammar module always returns a deterministic form. The
//! only fallible seam is the statute provider, and its failures are
//! recovered by skipping the affected statute.

use thiserror::Error;

/// Main error type for engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The statute provider failed to answer.
    #[error("statute provider failed: {0}")]
    Provider(String),
}

impl EngineError {
    /// Wrap a provider-side error.
    #[must_use]
    pub fn provider(source: impl std::fmt::Display) -> Self {
        Self::Provider(source.to_string())
    }
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
