//! Error types for the matching engine.

use thiserror::Error;

use teammatch_embed::EmbedError;

/// Errors for one matching request.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Role/member vectorization failed. Fatal: no retry at this layer.
    #[error("embedding failed: {0}")]
    Embedding(#[from] EmbedError),

    /// Vectors within one request disagree on dimensionality.
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension of the first vector seen.
        expected: usize,
        /// Offending dimension.
        actual: usize,
    },

    /// The domain alignment stage could not run. Only ever surfaced inside
    /// the stage itself; the engine downgrades it to a skipped boost.
    #[error("domain alignment unavailable: {0}")]
    Alignment(String),
}
