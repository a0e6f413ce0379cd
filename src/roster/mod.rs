pub mod loader;
pub mod matrix;
pub mod registry;

pub use self::matrix::AffinityMatrix;
pub use self::registry::{Entity, EntityRegistry};
use crate::error::CohortResult;
use tracing::debug;

/// Loading phase: entities are registered and matrix rows appended.
/// No search can run until the builder is frozen into a [`Roster`].
#[derive(Debug, Clone, Default)]
pub struct RosterBuilder {
    registry: EntityRegistry,
    matrix: AffinityMatrix,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str) -> Entity {
        self.registry.register(name)
    }

    pub fn append_row(&mut self, row_scores: Vec<f64>) {
        self.matrix.append(row_scores);
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn matrix(&self) -> &AffinityMatrix {
        &self.matrix
    }

    /// Ends the loading phase. Fails if the matrix is not exactly
    /// triangular for the registered entities.
    pub fn freeze(self) -> CohortResult<Roster> {
        self.matrix.check_shape(self.registry.len())?;
        debug!(
            "Roster frozen with {} entities",
            self.registry.len()
        );
        Ok(Roster {
            registry: self.registry,
            matrix: self.matrix,
        })
    }
}

/// Searching phase: the entity set and matrix are fixed. The only mutation
/// is acceptance of a finished grouping, which needs `&mut` and so can never
/// overlap a search borrowing the roster.
#[derive(Debug, Clone)]
pub struct Roster {
    registry: EntityRegistry,
    matrix: AffinityMatrix,
}

impl Roster {
    pub fn entities(&self) -> &[Entity] {
        self.registry.all_entities()
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn matrix(&self) -> &AffinityMatrix {
        &self.matrix
    }

    pub(crate) fn matrix_mut(&mut self) -> &mut AffinityMatrix {
        &mut self.matrix
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}
