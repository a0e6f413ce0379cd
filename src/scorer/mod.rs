pub mod engine;

use crate::config::ScoringMode;
use crate::error::CohortResult;
use crate::partition::Partition;
use crate::roster::AffinityMatrix;

/// Totals the intra-group pairwise score of a partition. Lower is better.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    pub mode: ScoringMode,
}

impl Scorer {
    pub fn new(mode: ScoringMode) -> Self {
        Self { mode }
    }

    /// Sum over all groups and all intra-group pairs, unnormalized.
    pub fn score(&self, partition: &Partition, matrix: &AffinityMatrix) -> CohortResult<f64> {
        let mut total = 0.0;
        for group in partition.groups() {
            total += match self.mode {
                ScoringMode::GroupPosition => engine::score_group_by_position(group, matrix)?,
                ScoringMode::RegistryIndex => engine::score_group_by_index(group, matrix)?,
            };
        }
        Ok(total)
    }
}
