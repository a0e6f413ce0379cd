use crate::config::ScoringMode;
use crate::error::{CohortError, CohortResult};
use crate::optimizer::OptimizationResult;
use crate::partition::Partition;
use crate::roster::Roster;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

pub const DEFAULT_ACCEPT_DELTA: f64 = 1.0;

/// Member names per group, in group order then insertion order.
pub fn to_name_groups(partition: &Partition) -> Vec<Vec<String>> {
    partition
        .groups()
        .iter()
        .map(|g| g.members().iter().map(|e| e.name().to_string()).collect())
        .collect()
}

/// Member registry indices per group, aligned with [`to_name_groups`].
pub fn to_index_groups(partition: &Partition) -> Vec<Vec<usize>> {
    partition
        .groups()
        .iter()
        .map(|g| g.members().iter().map(|e| e.index).collect())
        .collect()
}

/// Where one entity landed: its group number and position inside the group.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Placement {
    pub name: String,
    pub index: usize,
    pub group: usize,
    pub position: usize,
}

pub fn to_placements(partition: &Partition) -> Vec<Placement> {
    let mut placements: Vec<Placement> = partition
        .groups()
        .iter()
        .enumerate()
        .flat_map(|(group, g)| {
            g.members()
                .iter()
                .enumerate()
                .map(move |(position, e)| Placement {
                    name: e.name().to_string(),
                    index: e.index,
                    group,
                    position,
                })
        })
        .collect();
    placements.sort_by_key(|p| p.index);
    placements
}

/// Everything the approval step needs to show a grouping and later accept it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupingReport {
    pub score: f64,
    pub num_groups: usize,
    pub trials: usize,
    pub scoring_mode: ScoringMode,
    pub names: Vec<Vec<String>>,
    pub indices: Vec<Vec<usize>>,
    pub placements: Vec<Placement>,
}

impl GroupingReport {
    pub fn from_result(result: &OptimizationResult, scoring_mode: ScoringMode) -> Self {
        Self {
            score: result.score,
            num_groups: result.partition.len(),
            trials: result.trials,
            scoring_mode,
            names: to_name_groups(&result.partition),
            indices: to_index_groups(&result.partition),
            placements: to_placements(&result.partition),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> CohortResult<()> {
        let path = path.as_ref();
        info!("💾 Writing grouping report: {}", path.display());
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> CohortResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Checks that the stored indices still name the same roster entities
    /// and that every entity is placed exactly once.
    pub fn check_against(&self, roster: &Roster) -> CohortResult<()> {
        if self.names.len() != self.indices.len() {
            return Err(CohortError::Validation(
                "Report names and indices have a different number of groups".to_string(),
            ));
        }
        let mut seen = vec![false; roster.len()];
        for (names, indices) in self.names.iter().zip(&self.indices) {
            if names.len() != indices.len() {
                return Err(CohortError::Validation(
                    "Report names and indices are not aligned".to_string(),
                ));
            }
            for (name, &idx) in names.iter().zip(indices) {
                match roster.entities().get(idx) {
                    Some(e) if e.name() == name => {}
                    _ => {
                        return Err(CohortError::Validation(format!(
                            "Report entry '{}' (index {}) does not match the roster",
                            name, idx
                        )))
                    }
                }
                if std::mem::replace(&mut seen[idx], true) {
                    return Err(CohortError::Validation(format!(
                        "Report places '{}' more than once",
                        name
                    )));
                }
            }
        }

        let placed = seen.iter().filter(|&&s| s).count();
        if placed != roster.len() {
            return Err(CohortError::Validation(format!(
                "Report places {} of {} roster entities",
                placed,
                roster.len()
            )));
        }
        Ok(())
    }
}

/// Records an accepted grouping by adding `delta` to the score of every
/// intra-group pair, so the same pairings cost more next time.
/// Returns the number of pairs updated.
///
/// An index may appear only once across all groups.
pub fn accept(roster: &mut Roster, index_groups: &[Vec<usize>], delta: f64) -> CohortResult<usize> {
    let mut seen = HashSet::new();
    let mut pairs = Vec::new();
    for group in index_groups {
        for (p1, &a) in group.iter().enumerate() {
            if !seen.insert(a) {
                return Err(CohortError::Validation(format!(
                    "Entity {} is listed more than once",
                    a
                )));
            }
            for &b in &group[p1 + 1..] {
                pairs.push((a.min(b), a.max(b)));
            }
        }
    }

    // All or nothing: resolve every pair before touching the matrix.
    for &(lo, hi) in &pairs {
        roster.matrix().score_between(lo, hi)?;
    }

    let matrix = roster.matrix_mut();
    for &(lo, hi) in &pairs {
        matrix.increment(lo, hi, delta)?;
    }
    let updated = pairs.len();

    info!("✅ Accepted grouping: {} pair scores raised by {}", updated, delta);
    Ok(updated)
}
