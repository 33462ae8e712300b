//! teammatch-types - Common type definitions for the teammatch engine.
//!
//! This crate provides the shared data structures used across the teammatch
//! crates: the input schemas for roles and members, the matching options, and
//! the outcome/report shapes returned by the engine.
//!
//! Types derive `schemars::JsonSchema` so callers can retrieve authoritative
//! JSON Schemas for their input files (see the `teammatch schema` command).

mod input;
mod options;
mod outcome;

pub use input::{MemberRecord, RoleSpec, RolesInput, TermField};
pub use options::{
    AlignmentMethod, CategoryWeights, DomainAnchor, DomainBoostOptions, MatchOptions,
    default_domain_anchors,
};
pub use outcome::{
    AnchorAffinity, AlignmentSummary, DomainTrace, MatchDebug, MatchOutcome, MemberTrace,
    RankedCandidate, RoleReport, RoleTrace,
};
