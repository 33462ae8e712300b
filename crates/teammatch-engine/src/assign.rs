//! Greedy role-major assignment.

/// Assign at most one member to each role, greedily, in role order.
///
/// For each row the not-yet-assigned column with the strictly highest score
/// wins; ties keep the first-encountered column (stable argmax). Once the
/// pool is exhausted the remaining roles get `None`. Role order is the only
/// priority lever; this is deliberately not a maximum-weight matching.
#[must_use]
pub fn greedy_assign(matrix: &[Vec<f64>]) -> Vec<Option<usize>> {
    let member_count = matrix.first().map_or(0, Vec::len);
    let mut taken = vec![false; member_count];
    matrix
        .iter()
        .map(|row| {
            let mut best: Option<(usize, f64)> = None;
            for (j, score) in row.iter().enumerate() {
                if taken[j] {
                    continue;
                }
                match best {
                    Some((_, top)) if *score <= top => {}
                    _ => best = Some((j, *score)),
                }
            }
            if let Some((j, _)) = best {
                taken[j] = true;
            }
            best.map(|(j, _)| j)
        })
        .collect()
}
