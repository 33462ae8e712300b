//! Feature composition: turn a role or member record into the single text
//! string sent for embedding.
//!
//! The embedding call accepts one string per entity, so category emphasis is
//! applied by repeating the category sentence rather than by numeric
//! weighting.

use teammatch_types::{CategoryWeights, MemberRecord};

/// A role profile ready for embedding.
#[derive(Debug, Clone)]
pub struct ComposedRole {
    /// Role name.
    pub name: String,
    /// Core skills used for the text.
    pub core_skills: Vec<String>,
    /// Composed profile text; empty when the role has no skills.
    pub text: String,
}

/// A member profile ready for embedding.
#[derive(Debug, Clone)]
pub struct ComposedMember {
    /// Member name.
    pub name: String,
    /// Skills after flattening and truncation.
    pub skills: Vec<String>,
    /// Languages after flattening and truncation.
    pub languages: Vec<String>,
    /// Keywords after flattening and truncation.
    pub keywords: Vec<String>,
    /// `top_k` that was applied, if any.
    pub top_k_used: Option<usize>,
    /// Composed profile text; empty when every category is empty.
    pub text: String,
}

/// Compose a role profile from its core skill terms only.
///
/// The text stays narrow on purpose: prose fields would widen the embedding
/// and reward superficial overlap.
#[must_use]
pub fn compose_role(name: &str, core_skills: &[String]) -> ComposedRole {
    let text = if core_skills.is_empty() {
        String::new()
    } else {
        format!("Core skills: {}.", core_skills.join(", "))
    };
    ComposedRole {
        name: name.to_string(),
        core_skills: core_skills.to_vec(),
        text,
    }
}

/// Compose a member profile from its three evidence categories.
///
/// Each non-empty category contributes one labelled sentence, repeated
/// `round(weight)` times (at least once). An all-empty member composes to
/// the empty string but still participates in scoring.
#[must_use]
pub fn compose_member(
    member: &MemberRecord,
    weights: &CategoryWeights,
    top_k: Option<usize>,
) -> ComposedMember {
    let top_k_used = top_k.filter(|k| *k > 0);
    let skills = member.skills.collect(top_k);
    let languages = member.languages.collect(top_k);
    let keywords = member.keywords.collect(top_k);

    let mut sentences: Vec<String> = Vec::new();
    push_sentence(&mut sentences, "Top skills", &skills, weights.skills);
    push_sentence(
        &mut sentences,
        "Programming languages",
        &languages,
        weights.languages,
    );
    push_sentence(&mut sentences, "Keywords", &keywords, weights.keywords);

    ComposedMember {
        name: member.display_name(),
        skills,
        languages,
        keywords,
        top_k_used,
        text: sentences.join(" "),
    }
}

fn push_sentence(sentences: &mut Vec<String>, label: &str, terms: &[String], weight: f64) {
    if terms.is_empty() {
        return;
    }
    let sentence = format!("{label}: {}.", terms.join(", "));
    for _ in 0..CategoryWeights::repetitions(weight) {
        sentences.push(sentence.clone());
    }
}
