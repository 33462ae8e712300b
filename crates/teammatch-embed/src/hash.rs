//! Deterministic local encoder for offline runs and tests.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;

use crate::error::EmbedError;
use crate::provider::EmbeddingProvider;

/// Hash-based text encoder with a fixed dimension.
///
/// Maps identical texts to identical unit-length vectors without any network
/// call. The geometry is meaningless for unrelated texts; it exists so the
/// pipeline can run end-to-end where no embedding service is reachable.
#[derive(Clone)]
pub struct HashEncoder {
    dimension: usize,
}

impl HashEncoder {
    /// Create an encoder producing vectors of `dimension` components.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    /// Encode one text into a unit-normalized vector.
    #[must_use]
    pub fn encode(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0_f32; self.dimension];
        for (position, component) in vector.iter_mut().enumerate() {
            let position = position as u64;

            let mut hasher = DefaultHasher::new();
            text.hash(&mut hasher);
            position.hash(&mut hasher);
            let first = hasher.finish();

            let mut hasher = DefaultHasher::new();
            text.hash(&mut hasher);
            position.wrapping_mul(31).hash(&mut hasher);
            let second = hasher.finish();

            let mixed = first.wrapping_mul(31).wrapping_add(second);
            let bucket = u16::try_from(mixed % 1000).unwrap_or(0);
            *component = f32::from(bucket) / 1000.0;
        }
        normalize(&vector)
    }

    /// Vector dimension of this encoder.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

impl Default for HashEncoder {
    fn default() -> Self {
        Self::new(384)
    }
}

fn normalize(v: &[f32]) -> Vec<f32> {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm == 0.0 {
        return v.to_vec();
    }
    v.iter().map(|x| x / norm).collect()
}

#[async_trait]
impl EmbeddingProvider for HashEncoder {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError> {
        Ok(texts.iter().map(|text| self.encode(text)).collect())
    }
}
