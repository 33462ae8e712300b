//! The text-to-vector boundary the engine depends on.

use async_trait::async_trait;

use crate::error::EmbedError;

/// Opaque text-to-vector function.
///
/// All vectors returned within one request are expected to share one
/// dimensionality; the engine verifies this and treats a mismatch as fatal.
/// Determinism across calls is not assumed.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a batch of texts, one vector per text, in order.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError>;

    /// Embed a single text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        let texts = [text.to_string()];
        let mut vectors = self.embed_batch(&texts).await?;
        if vectors.len() != 1 {
            return Err(EmbedError::CountMismatch {
                expected: 1,
                actual: vectors.len(),
            });
        }
        vectors.pop().ok_or(EmbedError::CountMismatch {
            expected: 1,
            actual: 0,
        })
    }
}
