//! Outcome and report shapes returned by the engine.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::options::AlignmentMethod;

/// Full result of one matching request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct MatchOutcome {
    /// Role name to member name, at most one entry per role, each member at
    /// most once. Entries follow role input order.
    pub assignments: serde_json::Map<String, serde_json::Value>,
    /// Adjusted role-by-member similarity matrix (row order = role order).
    pub similarity_matrix: Vec<Vec<f64>>,
    /// One report per role, assigned or not.
    pub reports: Vec<RoleReport>,
    /// Audit trail: effective options, composed texts, domain summary.
    pub debug: MatchDebug,
}

/// Ranked candidate list and summary for one role.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RoleReport {
    /// Role name.
    pub role: String,
    /// All members ranked by raw similarity, descending.
    pub candidates: Vec<RankedCandidate>,
    /// Assigned member, or the top-ranked candidate when the pool ran out.
    pub winner: Option<String>,
    /// One-line human-readable summary.
    pub log: String,
}

/// One candidate row in a role report.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RankedCandidate {
    /// Member name.
    pub member: String,
    /// Raw (adjusted) cosine similarity.
    pub score: f64,
    /// Display-only softmax share of this role's row.
    pub soft_score: f64,
}

/// Request-scoped audit trail echoed back to the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct MatchDebug {
    /// Effective `top_k`.
    pub top_k: Option<usize>,
    /// Effective report softmax temperature.
    pub softmax_temperature: f64,
    /// Per-role composed text and the core skills that produced it.
    pub roles: Vec<RoleTrace>,
    /// Per-member composed text and post-truncation category arrays.
    pub members: Vec<MemberTrace>,
    /// Domain alignment summary, present when the boost stage ran.
    pub domain: Option<DomainTrace>,
}

/// What went into one role's embedding.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RoleTrace {
    /// Role name.
    pub role: String,
    /// Core skills used.
    pub core_skills: Vec<String>,
    /// Composed profile text.
    pub text: String,
}

/// What went into one member's embedding.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MemberTrace {
    /// Member name.
    pub name: String,
    /// `top_k` applied to the categories, if any.
    pub top_k_used: Option<usize>,
    /// Skills after flattening and truncation.
    pub skills: Vec<String>,
    /// Languages after flattening and truncation.
    pub languages: Vec<String>,
    /// Keywords after flattening and truncation.
    pub keywords: Vec<String>,
    /// Composed profile text.
    pub text: String,
}

/// Summary of the domain alignment stage.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DomainTrace {
    /// Effective boost strength.
    pub strength: f64,
    /// Effective softmax temperature for the domain distributions.
    pub temperature: f64,
    /// Alignment method used.
    pub method: AlignmentMethod,
    /// Anchor names, in catalogue order.
    pub anchors: Vec<String>,
    /// Spread of the alignment matrix.
    pub alignment: AlignmentSummary,
    /// Per-role anchor affinities, in role order.
    pub roles: Vec<AnchorAffinity>,
    /// Per-member anchor affinities, in member order.
    pub members: Vec<AnchorAffinity>,
}

/// Min/max/mean of an alignment matrix.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema)]
pub struct AlignmentSummary {
    /// Smallest alignment cell.
    pub min: f64,
    /// Largest alignment cell.
    pub max: f64,
    /// Mean over all cells.
    pub mean: f64,
}

/// Raw anchor similarities for one role or member.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnchorAffinity {
    /// Name of the best-matching anchor.
    pub top: String,
    /// Cosine similarity to every anchor, in catalogue order.
    pub scores: Vec<f64>,
}
