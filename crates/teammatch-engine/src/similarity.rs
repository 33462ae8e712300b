//! Pairwise cosine similarity and the shared softmax.
//!
//! Pure numeric operations: no network calls, deterministic given the
//! vectors. Rows of the pairwise matrix are computed in parallel.

use rayon::prelude::*;

/// Cosine similarity of two vectors, in `[-1, 1]`.
///
/// A zero-norm vector (or a length mismatch) scores `0.0` rather than
/// erroring; degenerate embeddings stay in the ranking with no signal.
#[must_use]
pub fn cosine(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }
    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let x = f64::from(*x);
        let y = f64::from(*y);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Pairwise cosine matrix: `rows.len() × cols.len()`.
#[must_use]
pub fn similarity_matrix(rows: &[Vec<f32>], cols: &[Vec<f32>]) -> Vec<Vec<f64>> {
    rows.par_iter()
        .map(|row| cols.iter().map(|col| cosine(row, col)).collect())
        .collect()
}

/// Numerically stable temperature-scaled softmax over one row.
///
/// Non-positive temperatures are treated as `1.0`. Temperatures below one
/// sharpen the distribution, above one smooth it. The row maximum is
/// subtracted before exponentiating and the denominator is clamped away
/// from zero.
#[must_use]
pub fn softmax_row(row: &[f64], temperature: f64) -> Vec<f64> {
    if row.is_empty() {
        return Vec::new();
    }
    let temperature = if temperature > 0.0 { temperature } else { 1.0 };
    let scaled: Vec<f64> = row.iter().map(|x| x / temperature).collect();
    let max = scaled.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scaled.iter().map(|x| (x - max).exp()).collect();
    let sum: f64 = exps.iter().sum::<f64>().max(1e-9);
    exps.iter().map(|e| e / sum).collect()
}

/// L2-normalize one row, clamping the norm away from zero.
#[must_use]
pub fn l2_normalize(row: &[f64]) -> Vec<f64> {
    let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt().max(1e-9);
    row.iter().map(|x| x / norm).collect()
}
