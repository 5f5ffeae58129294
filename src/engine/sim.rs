//! SimWorld - a headless implementation of the collaborator traits.
//!
//! Keeps block entities in a plain table keyed by id, with a color and a
//! [`BlockMotion`] each. Used by the demo binary and the test suite; a
//! real host would implement [`BlockWorld`] over its own scene objects.

use std::collections::HashMap;

use crate::core::ColorPicker;
use crate::types::{BlockId, ColorTag, Coord, CELL_SIZE, FALL_SPEED, SWAP_SPEED};
use crate::world::{BlockSpawner, BlockWorld};

use super::motion::{cell_center, BlockMotion, WorldPos};

/// One simulated block entity.
#[derive(Debug, Clone, Copy)]
pub struct SimBlock {
    pub color: ColorTag,
    pub motion: BlockMotion,
}

/// In-memory block table with deterministic color drawing.
#[derive(Debug, Clone)]
pub struct SimWorld {
    blocks: HashMap<BlockId, SimBlock>,
    next_id: u32,
    picker: ColorPicker,
    fall_speed: f32,
    swap_speed: f32,
    /// World y at which spawned blocks appear before falling in.
    spawn_height: f32,
    destroyed: u32,
}

impl SimWorld {
    pub fn new(seed: u32, palette_size: u8) -> Self {
        Self {
            blocks: HashMap::new(),
            next_id: 0,
            picker: ColorPicker::new(seed, palette_size),
            fall_speed: FALL_SPEED,
            swap_speed: SWAP_SPEED,
            spawn_height: 8.0 * CELL_SIZE,
            destroyed: 0,
        }
    }

    /// A world where every animation completes instantly, so each tick
    /// sees every block at rest. Handy for tests and benchmarks.
    pub fn instant(seed: u32, palette_size: u8) -> Self {
        let mut world = Self::new(seed, palette_size);
        world.fall_speed = f32::INFINITY;
        world.swap_speed = f32::INFINITY;
        world
    }

    /// Create a block at rest with the given color. Setup helper for
    /// tests; ticking code spawns through [`BlockSpawner`] instead.
    pub fn insert(&mut self, color: ColorTag) -> BlockId {
        let id = BlockId::new(self.next_id);
        self.next_id += 1;
        self.blocks.insert(
            id,
            SimBlock {
                color,
                motion: BlockMotion::at((0.0, self.spawn_height)),
            },
        );
        id
    }

    /// Advance every block's animation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        for block in self.blocks.values_mut() {
            block.motion.advance(dt);
        }
    }

    pub fn contains(&self, id: BlockId) -> bool {
        self.blocks.contains_key(&id)
    }

    pub fn block(&self, id: BlockId) -> Option<&SimBlock> {
        self.blocks.get(&id)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// How many blocks have been destroyed over the world's lifetime.
    pub fn destroyed(&self) -> u32 {
        self.destroyed
    }

    fn retarget(&mut self, id: BlockId, dest: Coord, speed: f32) {
        let target: WorldPos = cell_center(dest, CELL_SIZE);
        if let Some(block) = self.blocks.get_mut(&id) {
            block.motion.start_toward(target, speed);
        }
    }
}

impl BlockWorld for SimWorld {
    fn color(&self, block: BlockId) -> Option<ColorTag> {
        self.blocks.get(&block).map(|b| b.color)
    }

    fn is_at_rest(&self, block: BlockId) -> bool {
        self.blocks
            .get(&block)
            .map_or(true, |b| b.motion.is_at_rest())
    }

    fn start_falling(&mut self, block: BlockId, dest: Coord) {
        let speed = self.fall_speed;
        self.retarget(block, dest, speed);
    }

    fn move_towards(&mut self, block: BlockId, dest: Coord) {
        let speed = self.swap_speed;
        self.retarget(block, dest, speed);
    }

    fn destroy(&mut self, block: BlockId) {
        if self.blocks.remove(&block).is_some() {
            self.destroyed += 1;
        }
    }
}

impl BlockSpawner for SimWorld {
    fn spawn(&mut self) -> BlockId {
        let color = self.picker.draw();
        self.insert(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_assigns_distinct_ids() {
        let mut world = SimWorld::new(1, 5);
        let a = world.spawn();
        let b = world.spawn();
        assert_ne!(a, b);
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn test_unknown_ids_are_inert() {
        let mut world = SimWorld::new(1, 5);
        let ghost = BlockId::new(999);
        assert_eq!(world.color(ghost), None);
        assert!(world.is_at_rest(ghost));
        world.start_falling(ghost, Coord::new(0, 0));
        world.destroy(ghost);
        assert_eq!(world.destroyed(), 0);
    }

    #[test]
    fn test_falling_block_comes_to_rest() {
        let mut world = SimWorld::new(1, 5);
        let id = world.spawn();
        world.start_falling(id, Coord::new(0, 0));
        assert!(!world.is_at_rest(id));

        for _ in 0..100 {
            world.advance(0.1);
        }
        assert!(world.is_at_rest(id));
        let pos = world.block(id).unwrap().motion.position();
        assert_eq!(pos, cell_center(Coord::new(0, 0), CELL_SIZE));
    }

    #[test]
    fn test_instant_world_never_animates() {
        let mut world = SimWorld::instant(1, 5);
        let id = world.spawn();
        world.start_falling(id, Coord::new(3, -2));
        assert!(world.is_at_rest(id));
    }

    #[test]
    fn test_destroy_counts() {
        let mut world = SimWorld::new(1, 5);
        let id = world.spawn();
        world.destroy(id);
        assert!(!world.contains(id));
        assert_eq!(world.destroyed(), 1);
    }
}
