//! Per-role ranked reports.
//!
//! Reports carry both the raw adjusted similarity and a display-sharpened
//! "soft score" (row-wise softmax). The soft score exists purely to make the
//! winning margin readable; the assignment solver never sees it.

use teammatch_types::{RankedCandidate, RoleReport};

use crate::similarity::softmax_row;

/// Build one report per role, assigned or not.
///
/// Candidates are ranked by raw score descending; the stable sort keeps
/// member input order for exact ties. The winner is the assigned member, or
/// the top-ranked candidate when the pool had already run out.
#[must_use]
pub fn build_reports(
    role_names: &[String],
    member_names: &[String],
    matrix: &[Vec<f64>],
    assigned: &[Option<usize>],
    softmax_temperature: f64,
) -> Vec<RoleReport> {
    role_names
        .iter()
        .enumerate()
        .map(|(i, role)| {
            let row = matrix.get(i).map_or(&[] as &[f64], Vec::as_slice);
            let soft = softmax_row(row, softmax_temperature);

            let mut candidates: Vec<RankedCandidate> = member_names
                .iter()
                .enumerate()
                .map(|(j, member)| RankedCandidate {
                    member: member.clone(),
                    score: row.get(j).copied().unwrap_or(0.0),
                    soft_score: soft.get(j).copied().unwrap_or(0.0),
                })
                .collect();
            candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

            let winner = assigned
                .get(i)
                .copied()
                .flatten()
                .and_then(|j| member_names.get(j).cloned())
                .or_else(|| candidates.first().map(|c| c.member.clone()));

            let log = match candidates.first() {
                Some(top) => format!(
                    "Role '{role}': ranked {count} candidate(s) by cosine similarity; \
                     softmax applied for display. Top: {member} (cos={score:.4}, soft={soft:.4}).",
                    count = candidates.len(),
                    member = top.member,
                    score = top.score,
                    soft = top.soft_score,
                ),
                None => format!("Role '{role}': no candidates available."),
            };

            RoleReport {
                role: role.clone(),
                candidates,
                winner,
                log,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_ranked_by_raw_score() {
        let roles = vec!["backend".to_string()];
        let members = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let matrix = vec![vec![0.1, 0.9, 0.5]];
        let reports = build_reports(&roles, &members, &matrix, &[Some(1)], 0.6);

        let ranked: Vec<&str> = reports[0]
            .candidates
            .iter()
            .map(|c| c.member.as_str())
            .collect();
        assert_eq!(ranked, vec!["b", "c", "a"]);
        assert_eq!(reports[0].winner.as_deref(), Some("b"));
        assert!(reports[0].log.contains("Top: b"));
    }

    #[test]
    fn soft_scores_sum_to_one() {
        let roles = vec!["r".to_string()];
        let members = vec!["a".to_string(), "b".to_string()];
        let matrix = vec![vec![0.3, 0.7]];
        let reports = build_reports(&roles, &members, &matrix, &[None], 0.6);

        let sum: f64 = reports[0].candidates.iter().map(|c| c.soft_score).sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn unassigned_role_reports_top_candidate_as_winner() {
        let roles = vec!["r".to_string()];
        let members = vec!["a".to_string(), "b".to_string()];
        let matrix = vec![vec![0.2, 0.4]];
        let reports = build_reports(&roles, &members, &matrix, &[None], 0.6);
        assert_eq!(reports[0].winner.as_deref(), Some("b"));
    }

    #[test]
    fn tied_scores_keep_member_order() {
        let roles = vec!["r".to_string()];
        let members = vec!["first".to_string(), "second".to_string()];
        let matrix = vec![vec![0.5, 0.5]];
        let reports = build_reports(&roles, &members, &matrix, &[Some(0)], 0.6);
        assert_eq!(reports[0].candidates[0].member, "first");
    }
}
