use crate::error::{CohortError, CohortResult};

/// Lower-triangular pairwise scores. Row `i` holds the scores from entity
/// `i` to every entity registered after it, so `rows[i][j]` is the score
/// between `i` and `i + j + 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AffinityMatrix {
    rows: Vec<Vec<f64>>,
}

impl AffinityMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// Appends the next row in registration order.
    pub fn append(&mut self, row_scores: Vec<f64>) {
        self.rows.push(row_scores);
    }

    pub fn score_between(&self, i: usize, j: usize) -> CohortResult<f64> {
        if i >= j {
            return Err(CohortError::IndexOutOfRange { row: i, col: j });
        }
        self.rows
            .get(i)
            .and_then(|row| row.get(j - i - 1))
            .copied()
            .ok_or(CohortError::IndexOutOfRange { row: i, col: j })
    }

    pub fn increment(&mut self, i: usize, j: usize, delta: f64) -> CohortResult<()> {
        if i >= j {
            return Err(CohortError::IndexOutOfRange { row: i, col: j });
        }
        let cell = self
            .rows
            .get_mut(i)
            .and_then(|row| row.get_mut(j - i - 1))
            .ok_or(CohortError::IndexOutOfRange { row: i, col: j })?;
        *cell += delta;
        Ok(())
    }

    pub fn row(&self, i: usize) -> Option<&[f64]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Checks the triangular shape for `entity_count` entities: exactly one
    /// row per entity and `entity_count - i - 1` scores in row `i`.
    pub fn check_shape(&self, entity_count: usize) -> CohortResult<()> {
        if self.rows.len() != entity_count {
            return Err(CohortError::Validation(format!(
                "Affinity matrix has {} rows but the roster has {} entities",
                self.rows.len(),
                entity_count
            )));
        }
        for (i, row) in self.rows.iter().enumerate() {
            let expected = entity_count - i - 1;
            if row.len() != expected {
                return Err(CohortError::Validation(format!(
                    "Affinity row {} has {} scores, expected {}",
                    i,
                    row.len(),
                    expected
                )));
            }
        }
        Ok(())
    }
}
