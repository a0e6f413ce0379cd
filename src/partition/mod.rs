pub mod sizer;

pub use self::sizer::compute_sizes;
use crate::roster::Entity;
use fastrand::Rng;

/// A size-capped bucket of entities, kept in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    capacity: usize,
    members: Vec<Entity>,
}

impl Group {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            members: Vec::with_capacity(capacity),
        }
    }

    /// Rejects the entity when the group is already at capacity.
    pub fn try_insert(&mut self, entity: Entity) -> bool {
        if self.is_full() {
            return false;
        }
        self.members.push(entity);
        true
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn members(&self) -> &[Entity] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// One candidate assignment of the roster into groups with fixed capacities.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    groups: Vec<Group>,
    score: f64,
}

impl Partition {
    pub fn new(sizes: &[usize]) -> Self {
        Self {
            groups: sizes.iter().map(|&cap| Group::new(cap)).collect(),
            score: 0.0,
        }
    }

    /// Draws a group uniformly from all groups, full or not, and tries to
    /// insert there. A `false` return means the drawn group was full and the
    /// caller has to draw again.
    pub fn insert_into_random_group(&mut self, entity: &Entity, rng: &mut Rng) -> bool {
        if self.groups.is_empty() {
            return false;
        }
        let idx = rng.usize(0..self.groups.len());
        self.insert_into(idx, entity)
    }

    pub fn insert_into(&mut self, group_idx: usize, entity: &Entity) -> bool {
        match self.groups.get_mut(group_idx) {
            Some(group) => group.try_insert(entity.clone()),
            None => false,
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn set_score(&mut self, score: f64) {
        self.score = score;
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn total_capacity(&self) -> usize {
        self.groups.iter().map(Group::capacity).sum()
    }

    pub fn member_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }
}
