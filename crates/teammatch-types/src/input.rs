//! Input schemas for roles and members.
//!
//! The engine accepts roles either as an ordered name-to-spec map or as a
//! list of specs, and members as a list of records. Alias keys from upstream
//! extractors are declared on the schema instead of probed dynamically.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Roles input: a name-keyed map (order preserved) or a list of specs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RolesInput {
    /// List of role specs; unnamed entries default to `"Role {n}"`.
    Catalog(Vec<RoleSpec>),
    /// Ordered map of role name to spec. Map order is the assignment
    /// priority order.
    ByName(serde_json::Map<String, serde_json::Value>),
}

impl RolesInput {
    /// Resolve to an ordered list of `(name, core_skills)` pairs.
    ///
    /// Map keys win over any `title`/`name` field inside the spec. Map values
    /// that do not parse as a role spec contribute an empty skill list rather
    /// than failing the request.
    #[must_use]
    pub fn resolve(self) -> Vec<(String, Vec<String>)> {
        match self {
            Self::Catalog(specs) => specs
                .into_iter()
                .enumerate()
                .map(|(i, spec)| {
                    let name = spec.display_name(i);
                    (name, spec.core_skills)
                })
                .collect(),
            Self::ByName(map) => map
                .into_iter()
                .map(|(name, value)| {
                    let spec: RoleSpec = serde_json::from_value(value).unwrap_or_default();
                    (name, spec.core_skills)
                })
                .collect(),
        }
    }
}

/// A role to be filled, described by its core skill terms.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct RoleSpec {
    /// Role title (preferred name field).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Role name, used when `title` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Core skill terms, strongest-first.
    #[serde(default, alias = "skills")]
    pub core_skills: Vec<String>,
}

impl RoleSpec {
    /// Display name for the role at list position `index` (0-based).
    #[must_use]
    pub fn display_name(&self, index: usize) -> String {
        self.title
            .clone()
            .or_else(|| self.name.clone())
            .unwrap_or_else(|| format!("Role {}", index + 1))
    }
}

/// A candidate member with skill, language and keyword evidence.
///
/// Each category is an ordered, strongest-first collection. Upstream
/// extractors sometimes group terms under sub-headings; grouped input is
/// flattened by concatenating the group values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct MemberRecord {
    /// Member name.
    #[serde(default, alias = "id", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Skill terms.
    #[serde(default)]
    pub skills: TermField,
    /// Programming languages.
    #[serde(default, alias = "programming_languages")]
    pub languages: TermField,
    /// Free-form keywords.
    #[serde(default, alias = "notable_keywords")]
    pub keywords: TermField,
}

impl MemberRecord {
    /// Member display name, defaulting to `"Member"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| "Member".to_string())
    }
}

/// One category of member evidence: a flat term list or a grouped map.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TermField {
    /// Flat list of terms, strongest-first.
    Terms(Vec<String>),
    /// Grouped terms: group name to a term or list of terms. Group order is
    /// preserved when flattening.
    Grouped(serde_json::Map<String, serde_json::Value>),
}

impl Default for TermField {
    fn default() -> Self {
        Self::Terms(Vec::new())
    }
}

impl TermField {
    /// Flatten to at most `top_k` non-empty terms, strongest-first.
    ///
    /// `top_k` of `None` (or zero, fail-soft) keeps the full list. Grouped
    /// input concatenates group values in map order before truncating;
    /// non-string group members are skipped.
    #[must_use]
    pub fn collect(&self, top_k: Option<usize>) -> Vec<String> {
        let limit = match top_k {
            Some(k) if k > 0 => k,
            _ => usize::MAX,
        };
        match self {
            Self::Terms(terms) => terms
                .iter()
                .take(limit)
                .filter(|t| !t.is_empty())
                .cloned()
                .collect(),
            Self::Grouped(groups) => groups
                .values()
                .flat_map(|value| match value {
                    serde_json::Value::Array(items) => items
                        .iter()
                        .filter_map(|v| v.as_str().map(str::to_string))
                        .collect::<Vec<_>>(),
                    serde_json::Value::String(s) => vec![s.clone()],
                    _ => Vec::new(),
                })
                .filter(|t| !t.is_empty())
                .take(limit)
                .collect(),
        }
    }

    /// True when the field carries no terms at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Terms(terms) => terms.is_empty(),
            Self::Grouped(groups) => groups.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_map_order_is_preserved() {
        let input: RolesInput = serde_json::from_str(
            r#"{"zeta": {"core_skills": ["A"]}, "alpha": {"skills": ["B"]}}"#,
        )
        .unwrap();
        let resolved = input.resolve();
        assert_eq!(resolved[0].0, "zeta");
        assert_eq!(resolved[1].0, "alpha");
        assert_eq!(resolved[1].1, vec!["B".to_string()]);
    }

    #[test]
    fn role_list_defaults_names() {
        let input: RolesInput =
            serde_json::from_str(r#"[{"core_skills": ["X"]}, {"title": "lead"}]"#).unwrap();
        let resolved = input.resolve();
        assert_eq!(resolved[0].0, "Role 1");
        assert_eq!(resolved[1].0, "lead");
    }

    #[test]
    fn member_alias_keys() {
        let member: MemberRecord = serde_json::from_str(
            r#"{"id": "ada", "programming_languages": ["Rust"], "notable_keywords": ["systems"]}"#,
        )
        .unwrap();
        assert_eq!(member.display_name(), "ada");
        assert_eq!(member.languages.collect(None), vec!["Rust".to_string()]);
        assert_eq!(member.keywords.collect(None), vec!["systems".to_string()]);
    }

    #[test]
    fn grouped_terms_flatten_in_order() {
        let field: TermField = serde_json::from_str(
            r#"{"web": ["React", "CSS"], "infra": "Docker"}"#,
        )
        .unwrap();
        assert_eq!(field.collect(None), vec!["React", "CSS", "Docker"]);
        assert_eq!(field.collect(Some(2)), vec!["React", "CSS"]);
    }

    #[test]
    fn zero_top_k_keeps_full_list() {
        let field = TermField::Terms(vec!["a".into(), "b".into()]);
        assert_eq!(field.collect(Some(0)).len(), 2);
    }
}
