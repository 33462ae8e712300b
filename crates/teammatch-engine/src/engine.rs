//! Request orchestration: compose, embed, score, boost, assign, report.

use teammatch_embed::{EmbedError, EmbeddingProvider};
use teammatch_types::{
    MatchDebug, MatchOptions, MatchOutcome, MemberRecord, MemberTrace, RoleTrace, RolesInput,
};

use crate::assign::greedy_assign;
use crate::compose::{compose_member, compose_role};
use crate::domain::{apply_boost, compute_alignment};
use crate::error::EngineError;
use crate::report::build_reports;
use crate::similarity::similarity_matrix;

/// The role-to-candidate matching engine.
///
/// Holds the embedding provider it was constructed with; everything else is
/// request-scoped. One call to [`MatchEngine::match_roles`] is one complete,
/// independent computation.
pub struct MatchEngine<P> {
    provider: P,
}

impl<P: EmbeddingProvider> MatchEngine<P> {
    /// Build an engine around an embedding provider.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Match roles to members.
    ///
    /// Embeds every role and member profile up front, scores all pairs by
    /// cosine similarity, optionally rescales by domain alignment (best
    /// effort), assigns greedily in role order, and reports the full ranking
    /// per role.
    ///
    /// No roles or no members yields an empty outcome rather than an error.
    ///
    /// # Errors
    ///
    /// Role/member embedding failures and dimensionality mismatches are
    /// fatal. Domain alignment failures are not: the stage is skipped and
    /// the base matrix used unmodified.
    pub async fn match_roles(
        &self,
        roles: RolesInput,
        members: &[MemberRecord],
        options: &MatchOptions,
    ) -> Result<MatchOutcome, EngineError> {
        let composed_roles: Vec<_> = roles
            .resolve()
            .into_iter()
            .map(|(name, skills)| compose_role(&name, &skills))
            .collect();
        let composed_members: Vec<_> = members
            .iter()
            .map(|member| compose_member(member, &options.weights, options.top_k))
            .collect();

        let role_traces: Vec<RoleTrace> = composed_roles
            .iter()
            .map(|role| RoleTrace {
                role: role.name.clone(),
                core_skills: role.core_skills.clone(),
                text: role.text.clone(),
            })
            .collect();
        let member_traces: Vec<MemberTrace> = composed_members
            .iter()
            .map(|member| MemberTrace {
                name: member.name.clone(),
                top_k_used: member.top_k_used,
                skills: member.skills.clone(),
                languages: member.languages.clone(),
                keywords: member.keywords.clone(),
                text: member.text.clone(),
            })
            .collect();

        let mut debug = MatchDebug {
            top_k: options.top_k,
            softmax_temperature: options.softmax_temperature,
            roles: role_traces,
            members: member_traces,
            domain: None,
        };

        if composed_roles.is_empty() || composed_members.is_empty() {
            tracing::debug!(
                event = "engine.match.empty_input",
                roles = composed_roles.len(),
                members = composed_members.len(),
                "nothing to match"
            );
            return Ok(MatchOutcome {
                debug,
                ..MatchOutcome::default()
            });
        }

        // Batch precompute: every entity vector exists before scoring starts.
        let texts: Vec<String> = composed_roles
            .iter()
            .map(|r| r.text.clone())
            .chain(composed_members.iter().map(|m| m.text.clone()))
            .collect();
        let mut vectors = self.provider.embed_batch(&texts).await?;
        if vectors.len() != texts.len() {
            return Err(EngineError::Embedding(EmbedError::CountMismatch {
                expected: texts.len(),
                actual: vectors.len(),
            }));
        }
        let member_vectors = vectors.split_off(composed_roles.len());
        let role_vectors = vectors;
        check_dimensions(role_vectors.iter().chain(member_vectors.iter()))?;

        let base = similarity_matrix(&role_vectors, &member_vectors);

        let boost = &options.domain_boost;
        let adjusted = if boost.enabled && boost.strength > 0.0 {
            match compute_alignment(&self.provider, &role_vectors, &member_vectors, boost).await {
                Ok(alignment) => {
                    let adjusted = apply_boost(&base, &alignment.matrix, boost.strength);
                    debug.domain = Some(alignment.trace);
                    adjusted
                }
                Err(error) => {
                    tracing::warn!(
                        event = "engine.domain_boost.skipped",
                        error = %error,
                        "domain alignment failed, using base similarity"
                    );
                    base
                }
            }
        } else {
            base
        };

        let role_names: Vec<String> = composed_roles.iter().map(|r| r.name.clone()).collect();
        let member_names: Vec<String> = composed_members.iter().map(|m| m.name.clone()).collect();

        let assigned = greedy_assign(&adjusted);
        let reports = build_reports(
            &role_names,
            &member_names,
            &adjusted,
            &assigned,
            options.softmax_temperature,
        );

        let mut assignments = serde_json::Map::new();
        for (role, slot) in role_names.iter().zip(assigned.iter()) {
            if let Some(member) = slot.and_then(|j| member_names.get(j)) {
                assignments.insert(role.clone(), serde_json::Value::String(member.clone()));
            }
        }

        let boosted = debug.domain.is_some();
        tracing::debug!(
            event = "engine.match.completed",
            roles = role_names.len(),
            members = member_names.len(),
            assigned = assignments.len(),
            boosted = boosted,
            "matching completed"
        );

        Ok(MatchOutcome {
            assignments,
            similarity_matrix: adjusted,
            reports,
            debug,
        })
    }
}

fn check_dimensions<'a, I>(mut vectors: I) -> Result<(), EngineError>
where
    I: Iterator<Item = &'a Vec<f32>>,
{
    let Some(first) = vectors.next() else {
        return Ok(());
    };
    let expected = first.len();
    for vector in vectors {
        if vector.len() != expected {
            return Err(EngineError::DimensionMismatch {
                expected,
                actual: vector.len(),
            });
        }
    }
    Ok(())
}
