//! teammatch-engine - Role-to-candidate matching core.
//!
//! Matches project roles to candidate members by semantic similarity of
//! their composed skill profiles and produces a deterministic one-to-one
//! assignment with ranked, auditable per-role reports.
//!
//! # Pipeline
//!
//! ```text
//! roles / members
//!       │ compose      labelled profile sentences, repetition weighting
//!       ▼
//! embedding gateway    batch text → vector (external, opaque)
//!       │
//!       ▼
//! similarity           R×M cosine matrix
//!       │ domain       optional anchor-based alignment rescale (best effort)
//!       ▼
//! assign               greedy, role-major, one-to-one
//!       │
//!       ▼
//! report               ranked candidates + display-only soft scores
//! ```
//!
//! The engine is request-scoped: no state crosses calls, and the only await
//! points are the gateway batches.

// ============================================================================
// Core modules
// ============================================================================

mod assign;
mod compose;
mod domain;
mod engine;
mod error;
mod report;
mod similarity;

// ============================================================================
// Public exports
// ============================================================================

pub use assign::greedy_assign;
pub use compose::{ComposedMember, ComposedRole, compose_member, compose_role};
pub use domain::{DomainAlignment, apply_boost, compute_alignment};
pub use engine::MatchEngine;
pub use error::EngineError;
pub use report::build_reports;
pub use similarity::{cosine, l2_normalize, similarity_matrix, softmax_row};
