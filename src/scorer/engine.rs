use crate::error::CohortResult;
use crate::partition::Group;
use crate::roster::AffinityMatrix;

/// Sums `rows[p1][p2 - p1 - 1]` over every pair of group-local positions
/// `p1 < p2`. Which entities sit at those positions does not matter here:
/// only the group's fill order does.
pub fn score_group_by_position(group: &Group, matrix: &AffinityMatrix) -> CohortResult<f64> {
    let len = group.len();
    let mut total = 0.0;
    for p1 in 0..len {
        for p2 in (p1 + 1)..len {
            total += matrix.score_between(p1, p2)?;
        }
    }
    Ok(total)
}

/// Sums the stored score of every member pair, looked up by registry index.
pub fn score_group_by_index(group: &Group, matrix: &AffinityMatrix) -> CohortResult<f64> {
    let members = group.members();
    let mut total = 0.0;
    for (p1, a) in members.iter().enumerate() {
        for b in &members[p1 + 1..] {
            let (lo, hi) = if a.index < b.index {
                (a.index, b.index)
            } else {
                (b.index, a.index)
            };
            total += matrix.score_between(lo, hi)?;
        }
    }
    Ok(total)
}
