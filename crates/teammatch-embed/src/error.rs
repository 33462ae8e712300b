//! Error types for the embedding gateway.

use thiserror::Error;

/// Errors raised at the embedding boundary.
#[derive(Error, Debug)]
pub enum EmbedError {
    /// Missing or unusable configuration (endpoint URL, credential).
    #[error("embedding gateway not configured: {0}")]
    Config(String),

    /// Settings file could not be read or parsed.
    #[error("settings error: {0}")]
    Settings(String),

    /// Transport-level failure talking to the embedding service.
    #[error("embedding request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("embedding service returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body did not match the expected shape.
    #[error("embedding response could not be decoded: {0}")]
    Decode(String),

    /// The service returned a different number of vectors than texts sent.
    #[error("embedding service returned {actual} vectors for {expected} texts")]
    CountMismatch {
        /// Texts sent.
        expected: usize,
        /// Vectors received.
        actual: usize,
    },
}
