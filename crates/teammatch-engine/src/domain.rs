//! Domain alignment boost.
//!
//! Raw cosine over text embeddings rewards superficial lexical overlap even
//! across mismatched domains (a frontend role and a backend candidate both
//! mention "API"). This stage projects roles and members onto a fixed set of
//! named domain anchors, turns the anchor affinities into probability
//! distributions, and rescales the base similarity by how much the two
//! distributions agree.
//!
//! The stage is strictly best-effort: the engine swallows any error raised
//! here and falls back to the unscaled matrix.

use teammatch_embed::EmbeddingProvider;
use teammatch_types::{
    AlignmentMethod, AlignmentSummary, AnchorAffinity, DomainBoostOptions, DomainTrace,
    default_domain_anchors,
};

use crate::error::EngineError;
use crate::similarity::{l2_normalize, similarity_matrix, softmax_row};

/// Alignment matrix plus its audit trace.
#[derive(Debug, Clone)]
pub struct DomainAlignment {
    /// Role-by-member alignment scores in `[0, 1]`.
    pub matrix: Vec<Vec<f64>>,
    /// Trace for the debug payload.
    pub trace: DomainTrace,
}

/// Compute the role-by-member domain alignment matrix.
///
/// Anchor seed texts are embedded through the same provider as the entities;
/// both sides are softmaxed into domain distributions at
/// `options.temperature` and compared with the configured method.
///
/// # Errors
///
/// Propagates embedding failures and rejects an empty anchor catalogue. The
/// caller treats every error as "skip the stage".
pub async fn compute_alignment(
    provider: &dyn EmbeddingProvider,
    role_vectors: &[Vec<f32>],
    member_vectors: &[Vec<f32>],
    options: &DomainBoostOptions,
) -> Result<DomainAlignment, EngineError> {
    let anchors = options
        .anchors
        .clone()
        .unwrap_or_else(default_domain_anchors);
    if anchors.is_empty() {
        return Err(EngineError::Alignment("empty anchor catalogue".to_string()));
    }

    let seeds: Vec<String> = anchors.iter().map(|a| a.seed.clone()).collect();
    let anchor_vectors = provider.embed_batch(&seeds).await?;
    if anchor_vectors.len() != seeds.len() {
        return Err(EngineError::Alignment(format!(
            "{} anchor vectors for {} seeds",
            anchor_vectors.len(),
            seeds.len()
        )));
    }
    let anchor_names: Vec<String> = anchors.into_iter().map(|a| a.name).collect();

    let role_vs_anchor = similarity_matrix(role_vectors, &anchor_vectors);
    let member_vs_anchor = similarity_matrix(member_vectors, &anchor_vectors);

    let role_dist: Vec<Vec<f64>> = role_vs_anchor
        .iter()
        .map(|row| softmax_row(row, options.temperature))
        .collect();
    let member_dist: Vec<Vec<f64>> = member_vs_anchor
        .iter()
        .map(|row| softmax_row(row, options.temperature))
        .collect();

    let matrix = match options.method {
        AlignmentMethod::Dot => pairwise_dot(&role_dist, &member_dist),
        AlignmentMethod::Cosine => {
            let roles_normed: Vec<Vec<f64>> =
                role_dist.iter().map(|row| l2_normalize(row)).collect();
            let members_normed: Vec<Vec<f64>> =
                member_dist.iter().map(|row| l2_normalize(row)).collect();
            pairwise_dot(&roles_normed, &members_normed)
        }
    };

    let trace = DomainTrace {
        strength: options.strength,
        temperature: options.temperature,
        method: options.method,
        roles: affinities(&role_vs_anchor, &anchor_names),
        members: affinities(&member_vs_anchor, &anchor_names),
        anchors: anchor_names,
        alignment: summarize(&matrix),
    };

    Ok(DomainAlignment { matrix, trace })
}

/// Rescale a base similarity matrix by domain alignment.
///
/// `scale = 1 + strength * (2 * alignment - 1)`: full alignment multiplies
/// by `1 + strength`, full mismatch by `1 - strength`, and `0.5` leaves the
/// cell untouched. Strength is clamped to `[0, 1]`.
#[must_use]
pub fn apply_boost(base: &[Vec<f64>], alignment: &[Vec<f64>], strength: f64) -> Vec<Vec<f64>> {
    let strength = strength.clamp(0.0, 1.0);
    base.iter()
        .zip(alignment.iter())
        .map(|(base_row, align_row)| {
            base_row
                .iter()
                .zip(align_row.iter())
                .map(|(cell, align)| cell * (1.0 + strength * (2.0 * align - 1.0)))
                .collect()
        })
        .collect()
}

fn pairwise_dot(rows: &[Vec<f64>], cols: &[Vec<f64>]) -> Vec<Vec<f64>> {
    rows.iter()
        .map(|row| {
            cols.iter()
                .map(|col| row.iter().zip(col.iter()).map(|(a, b)| a * b).sum())
                .collect()
        })
        .collect()
}

fn affinities(scores: &[Vec<f64>], anchor_names: &[String]) -> Vec<AnchorAffinity> {
    scores
        .iter()
        .map(|row| {
            // First-encountered maximum, matching the solver's tie policy.
            let mut top = 0_usize;
            for (i, score) in row.iter().enumerate() {
                if *score > row[top] {
                    top = i;
                }
            }
            AnchorAffinity {
                top: anchor_names.get(top).cloned().unwrap_or_default(),
                scores: row.clone(),
            }
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn summarize(matrix: &[Vec<f64>]) -> AlignmentSummary {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    let mut count = 0_usize;
    for cell in matrix.iter().flatten() {
        min = min.min(*cell);
        max = max.max(*cell);
        sum += *cell;
        count += 1;
    }
    if count == 0 {
        return AlignmentSummary::default();
    }
    AlignmentSummary {
        min,
        max,
        mean: sum / count as f64,
    }
}
