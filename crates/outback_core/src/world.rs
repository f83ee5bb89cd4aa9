//! World container for entities
//!
//! The World owns every entity plus the motion state animating them, and
//! is the single mutation path after construction: `update(dt)` steps the
//! motion world, then re-derives entity transforms from their anchors and
//! motion offsets.

use outback_physics::{Hopper, MotionWorld};
use slotmap::{new_key_type, SlotMap};

use crate::Entity;

new_key_type! {
    /// Generational key to an entity in the world
    pub struct EntityKey;
}

/// The scene world containing all entities and their motion state
pub struct World {
    /// All entities in the world
    entities: SlotMap<EntityKey, Entity>,
    /// Animated motion state (scrollers, hopper)
    motion: MotionWorld,
    /// The entity animated by the hopper, if any
    hopper_entity: Option<EntityKey>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
            motion: MotionWorld::new(),
            hopper_entity: None,
        }
    }

    /// Add an entity to the world, returning its key
    pub fn add_entity(&mut self, entity: Entity) -> EntityKey {
        self.entities.insert(entity)
    }

    /// Get a reference to an entity by key
    pub fn get_entity(&self, key: EntityKey) -> Option<&Entity> {
        self.entities.get(key)
    }

    /// Get a mutable reference to an entity by key
    pub fn get_entity_mut(&mut self, key: EntityKey) -> Option<&mut Entity> {
        self.entities.get_mut(key)
    }

    /// Look up an entity by name
    pub fn get_by_name(&self, name: &str) -> Option<(EntityKey, &Entity)> {
        self.entities
            .iter()
            .find(|(_, e)| e.name.as_deref() == Some(name))
    }

    /// Get the number of entities
    #[inline]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Check if the world is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over all entities
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Iterate over keys and entities
    pub fn iter_with_keys(&self) -> impl Iterator<Item = (EntityKey, &Entity)> {
        self.entities.iter()
    }

    /// Get the motion world
    pub fn motion(&self) -> &MotionWorld {
        &self.motion
    }

    /// Get mutable access to the motion world
    pub fn motion_mut(&mut self) -> &mut MotionWorld {
        &mut self.motion
    }

    /// Install the hopper and bind it to the entity it animates
    pub fn set_hopper(&mut self, entity: EntityKey, hopper: Hopper) {
        self.motion.set_hopper(hopper);
        self.hopper_entity = Some(entity);
    }

    /// The entity animated by the hopper, if any
    pub fn hopper_entity(&self) -> Option<EntityKey> {
        self.hopper_entity
    }

    /// Tear down the hopper, cancelling its trigger timer
    pub fn clear_hopper(&mut self) {
        self.motion.clear_hopper();
        self.hopper_entity = None;
    }

    /// Update the world by stepping motion and syncing entity transforms
    ///
    /// This method:
    /// 1. Steps every scroller and the hopper
    /// 2. Re-derives each linked entity's position from its anchor plus
    ///    the current motion offset
    pub fn update(&mut self, dt: f32) {
        self.motion.step(dt);

        let hop_height = self
            .motion
            .hopper()
            .map(|h| h.sim.height_above_ground())
            .unwrap_or(0.0);

        for (key, entity) in &mut self.entities {
            if let Some(scroller_key) = entity.scroller {
                if let Some(offset) = self.motion.scroll_offset(scroller_key) {
                    entity.transform.position.x = entity.anchor.x + offset;
                }
            }
            if self.hopper_entity == Some(key) {
                entity.transform.position.y = entity.anchor.y + hop_height;
            }
        }
    }

    /// Clear all entities and motion state
    pub fn clear(&mut self) {
        self.entities.clear();
        self.motion = MotionWorld::new();
        self.hopper_entity = None;
    }
}
