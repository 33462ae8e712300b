//! End-to-end engine tests with stub embedding providers.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;

use teammatch_embed::{EmbedError, EmbeddingProvider, HashEncoder};
use teammatch_engine::{EngineError, MatchEngine};
use teammatch_types::{DomainBoostOptions, MatchOptions, MemberRecord, RolesInput};

/// Embeds category overlap onto fixed axes: frontend-ish texts land on one
/// axis, backend-ish on another, everything else on a third.
struct AxisProvider;

fn axis_vector(text: &str) -> Vec<f32> {
    let frontend = text.contains("React") || text.contains("CSS");
    let backend = text.contains("Python") || text.contains("SQL");
    match (frontend, backend) {
        (true, false) => vec![1.0, 0.0, 0.1],
        (false, true) => vec![0.0, 1.0, 0.1],
        _ => vec![0.1, 0.1, 1.0],
    }
}

#[async_trait]
impl EmbeddingProvider for AxisProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError> {
        Ok(texts.iter().map(|t| axis_vector(t)).collect())
    }
}

/// Succeeds for the first batch (roles + members) and fails afterwards, so
/// the anchor batch inside the boost stage is the call that breaks.
struct AnchorFailingProvider {
    calls: AtomicUsize,
}

#[async_trait]
impl EmbeddingProvider for AnchorFailingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Ok(texts.iter().map(|t| axis_vector(t)).collect())
        } else {
            Err(EmbedError::Decode("anchor backend down".to_string()))
        }
    }
}

/// Returns a differently-sized vector per text.
struct RaggedProvider;

#[async_trait]
impl EmbeddingProvider for RaggedProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError> {
        Ok(texts
            .iter()
            .enumerate()
            .map(|(i, _)| vec![1.0; 3 + i])
            .collect())
    }
}

fn example_roles() -> RolesInput {
    serde_json::from_value(json!({
        "frontend": { "core_skills": ["React", "CSS"] },
        "backend": { "core_skills": ["Python", "SQL"] },
    }))
    .unwrap()
}

fn example_members() -> Vec<MemberRecord> {
    serde_json::from_value(json!([
        {
            "name": "A",
            "skills": ["React", "CSS"],
            "languages": ["JavaScript"],
            "keywords": ["frontend"]
        },
        {
            "name": "B",
            "skills": ["Python", "SQL"],
            "languages": ["Python"],
            "keywords": ["backend"]
        }
    ]))
    .unwrap()
}

fn no_boost_options() -> MatchOptions {
    MatchOptions {
        domain_boost: DomainBoostOptions {
            enabled: false,
            ..DomainBoostOptions::default()
        },
        ..MatchOptions::default()
    }
}

#[tokio::test]
async fn category_overlap_drives_the_assignment() {
    let engine = MatchEngine::new(AxisProvider);
    let outcome = engine
        .match_roles(example_roles(), &example_members(), &no_boost_options())
        .await
        .unwrap();

    assert_eq!(outcome.assignments["frontend"], json!("A"));
    assert_eq!(outcome.assignments["backend"], json!("B"));
    assert_eq!(outcome.similarity_matrix.len(), 2);
    assert_eq!(outcome.reports.len(), 2);
}

#[tokio::test]
async fn empty_inputs_yield_an_empty_outcome() {
    let engine = MatchEngine::new(AxisProvider);

    let no_roles: RolesInput = serde_json::from_value(json!({})).unwrap();
    let outcome = engine
        .match_roles(no_roles, &example_members(), &MatchOptions::default())
        .await
        .unwrap();
    assert!(outcome.assignments.is_empty());
    assert!(outcome.similarity_matrix.is_empty());
    assert!(outcome.reports.is_empty());

    let outcome = engine
        .match_roles(example_roles(), &[], &MatchOptions::default())
        .await
        .unwrap();
    assert!(outcome.assignments.is_empty());
    assert!(outcome.reports.is_empty());
}

#[tokio::test]
async fn surplus_roles_stay_unassigned() {
    let engine = MatchEngine::new(AxisProvider);
    let roles: RolesInput = serde_json::from_value(json!({
        "frontend": { "core_skills": ["React"] },
        "backend": { "core_skills": ["Python"] },
        "design": { "core_skills": ["Figma"] },
    }))
    .unwrap();
    let members: Vec<MemberRecord> =
        serde_json::from_value(json!([{ "name": "solo", "skills": ["React"] }])).unwrap();

    let outcome = engine
        .match_roles(roles, &members, &no_boost_options())
        .await
        .unwrap();

    assert_eq!(outcome.assignments.len(), 1);
    assert_eq!(outcome.reports.len(), 3);
    // Every report still ranks the full member list.
    assert!(outcome.reports.iter().all(|r| r.candidates.len() == 1));
}

#[tokio::test]
async fn soft_scores_sum_to_one_per_report() {
    let engine = MatchEngine::new(AxisProvider);
    let outcome = engine
        .match_roles(example_roles(), &example_members(), &MatchOptions::default())
        .await
        .unwrap();

    for report in &outcome.reports {
        let sum: f64 = report.candidates.iter().map(|c| c.soft_score).sum();
        assert!((sum - 1.0).abs() < 1e-6, "report {}: {sum}", report.role);
    }
}

#[tokio::test]
async fn zero_strength_equals_disabled_boost() {
    let engine = MatchEngine::new(AxisProvider);
    let zero_strength = MatchOptions {
        domain_boost: DomainBoostOptions {
            strength: 0.0,
            ..DomainBoostOptions::default()
        },
        ..MatchOptions::default()
    };

    let base = engine
        .match_roles(example_roles(), &example_members(), &no_boost_options())
        .await
        .unwrap();
    let unscaled = engine
        .match_roles(example_roles(), &example_members(), &zero_strength)
        .await
        .unwrap();

    assert_eq!(base.similarity_matrix, unscaled.similarity_matrix);
    assert!(unscaled.debug.domain.is_none());
}

#[tokio::test]
async fn boost_failure_falls_back_to_base_similarity() {
    let failing = MatchEngine::new(AnchorFailingProvider {
        calls: AtomicUsize::new(0),
    });
    let outcome = failing
        .match_roles(example_roles(), &example_members(), &MatchOptions::default())
        .await
        .unwrap();

    let base = MatchEngine::new(AxisProvider)
        .match_roles(example_roles(), &example_members(), &no_boost_options())
        .await
        .unwrap();

    assert!(outcome.debug.domain.is_none());
    assert_eq!(outcome.similarity_matrix, base.similarity_matrix);
    assert_eq!(outcome.assignments, base.assignments);
}

#[tokio::test]
async fn boost_trace_is_present_when_the_stage_runs() {
    let engine = MatchEngine::new(AxisProvider);
    let outcome = engine
        .match_roles(example_roles(), &example_members(), &MatchOptions::default())
        .await
        .unwrap();

    let domain = outcome.debug.domain.expect("boost stage should have run");
    assert_eq!(domain.anchors.len(), 10);
    assert_eq!(domain.roles.len(), 2);
    assert_eq!(domain.members.len(), 2);
    assert!(domain.alignment.min >= 0.0);
    assert!(domain.alignment.max <= 1.0 + 1e-9);
}

#[tokio::test]
async fn dimension_mismatch_is_fatal() {
    let engine = MatchEngine::new(RaggedProvider);
    let error = engine
        .match_roles(example_roles(), &example_members(), &no_boost_options())
        .await
        .unwrap_err();

    assert!(matches!(error, EngineError::DimensionMismatch { .. }));
}

#[tokio::test]
async fn tied_members_resolve_to_the_first() {
    let engine = MatchEngine::new(AxisProvider);
    let roles: RolesInput =
        serde_json::from_value(json!({ "frontend": { "core_skills": ["React"] } })).unwrap();
    // Identical profiles embed identically: the tie must go to "first".
    let members: Vec<MemberRecord> = serde_json::from_value(json!([
        { "name": "first", "skills": ["React"] },
        { "name": "second", "skills": ["React"] }
    ]))
    .unwrap();

    let outcome = engine
        .match_roles(roles, &members, &no_boost_options())
        .await
        .unwrap();

    assert_eq!(outcome.assignments["frontend"], json!("first"));
}

#[tokio::test]
async fn empty_profiles_still_score_without_crashing() {
    let engine = MatchEngine::new(HashEncoder::new(64));
    let roles: RolesInput =
        serde_json::from_value(json!({ "mystery": {} })).unwrap();
    let members: Vec<MemberRecord> = serde_json::from_value(json!([{ "name": "blank" }])).unwrap();

    let outcome = engine
        .match_roles(roles, &members, &MatchOptions::default())
        .await
        .unwrap();

    assert_eq!(outcome.debug.roles[0].text, "");
    assert_eq!(outcome.debug.members[0].text, "");
    assert_eq!(outcome.reports.len(), 1);
}

#[tokio::test]
async fn file_driven_offline_run() {
    use std::io::Write as _;

    let dir = tempfile::tempdir().unwrap();
    let roles_path = dir.path().join("roles.json");
    let members_path = dir.path().join("members.json");
    std::fs::File::create(&roles_path)
        .unwrap()
        .write_all(
            json!({
                "frontend": { "core_skills": ["React", "CSS"] },
                "backend": { "core_skills": ["Python", "SQL"] }
            })
            .to_string()
            .as_bytes(),
        )
        .unwrap();
    std::fs::File::create(&members_path)
        .unwrap()
        .write_all(json!(example_members()).to_string().as_bytes())
        .unwrap();

    let roles: RolesInput =
        serde_json::from_str(&std::fs::read_to_string(&roles_path).unwrap()).unwrap();
    let members: Vec<MemberRecord> =
        serde_json::from_str(&std::fs::read_to_string(&members_path).unwrap()).unwrap();

    let engine = MatchEngine::new(HashEncoder::default());
    let outcome = engine
        .match_roles(roles, &members, &MatchOptions::default())
        .await
        .unwrap();

    // Hash geometry is arbitrary; the structural guarantees still hold.
    assert_eq!(outcome.reports.len(), 2);
    assert_eq!(outcome.assignments.len(), 2);
    let mut assigned: Vec<&str> = outcome
        .assignments
        .values()
        .filter_map(|v| v.as_str())
        .collect();
    assigned.sort_unstable();
    assigned.dedup();
    assert_eq!(assigned.len(), 2, "assignment must be injective");
}
