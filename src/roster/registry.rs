use std::collections::HashMap;
use std::sync::Arc;

/// A named roster member and its row/column position in the affinity matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entity {
    pub name: Arc<str>,
    pub index: usize,
}

impl Entity {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Deduplicates roster entries by exact name, handing out indices in
/// first-seen order. Grows only.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    entities: Vec<Entity>,
    by_name: HashMap<Arc<str>, usize>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str) -> Entity {
        if let Some(&idx) = self.by_name.get(name) {
            return self.entities[idx].clone();
        }

        let entity = Entity {
            name: Arc::from(name),
            index: self.entities.len(),
        };
        self.by_name.insert(entity.name.clone(), entity.index);
        self.entities.push(entity.clone());
        entity
    }

    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.by_name.get(name).map(|&idx| &self.entities[idx])
    }

    pub fn all_entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
