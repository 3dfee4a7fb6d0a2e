use std::collections::HashMap;

use bevy::prelude::*;

use crate::core::components::BallId;

/// Identity -> entity map for every ball currently alive (active or merging).
/// Owned by the running `App` as a resource, so its lifetime is one game
/// session; tests build their own instance instead of sharing process state.
///
/// Entries are added on spawn and removed on the Removed transition. Lookup of
/// an unknown identity is an absent result, never an error.
#[derive(Resource, Default, Debug)]
pub struct BallRegistry {
    balls: HashMap<BallId, Entity>,
}

impl BallRegistry {
    pub fn insert(&mut self, id: BallId, entity: Entity) {
        self.balls.insert(id, entity);
    }

    pub fn remove(&mut self, id: &BallId) -> Option<Entity> {
        self.balls.remove(id)
    }

    pub fn get(&self, id: &BallId) -> Option<Entity> {
        self.balls.get(id).copied()
    }

    pub fn contains(&self, id: &BallId) -> bool {
        self.balls.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_lookup_remove() {
        let mut registry = BallRegistry::default();
        let id = BallId::fresh();
        let entity = Entity::from_raw(7);
        registry.insert(id, entity);
        assert_eq!(registry.get(&id), Some(entity));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.remove(&id), Some(entity));
        assert!(registry.is_empty());
    }

    #[test]
    fn unknown_identity_is_absent_not_an_error() {
        let registry = BallRegistry::default();
        assert_eq!(registry.get(&BallId::fresh()), None);
        assert!(!registry.contains(&BallId::fresh()));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut registry = BallRegistry::default();
        let id = BallId::fresh();
        registry.insert(id, Entity::from_raw(1));
        assert!(registry.remove(&id).is_some());
        assert!(registry.remove(&id).is_none());
    }
}
