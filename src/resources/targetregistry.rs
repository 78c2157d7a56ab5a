//! Map id to entity lookup for the current level.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;

/// Every spawned map object keyed by its map id.
///
/// Filled during the first load phase and read when links are wired. The
/// first entity registered under an id keeps it.
#[derive(Resource, Debug, Default, Clone)]
pub struct TargetRegistry {
    by_id: FxHashMap<u32, Entity>,
}

impl TargetRegistry {
    /// Register `entity` under `id`. Returns `false` if the id is taken.
    pub fn register(&mut self, id: u32, entity: Entity) -> bool {
        if self.by_id.contains_key(&id) {
            return false;
        }
        self.by_id.insert(id, entity);
        true
    }

    pub fn get(&self, id: u32) -> Option<Entity> {
        self.by_id.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_id.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn first_registration_wins() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let mut registry = TargetRegistry::default();
        assert!(registry.register(7, a));
        assert!(!registry.register(7, b));
        assert_eq!(registry.get(7), Some(a));
        assert_eq!(registry.get(8), None);
    }
}
