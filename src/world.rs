//! Collaborator traits - the seam between the board and its host.
//!
//! The board records occupancy and resolves grid rules; everything a
//! block entity actually *is* (sprite, physics body, table row) lives on
//! the other side of these traits. The engine never waits on an
//! animation; it only polls `is_at_rest` before scoring.

use crate::types::{BlockId, ColorTag, Coord};

/// Host-side view of block entities referenced by the board.
pub trait BlockWorld {
    /// The block's color tag, or `None` if the id is unknown.
    fn color(&self, block: BlockId) -> Option<ColorTag>;

    /// True when the block is not animating toward a target position.
    /// Unknown ids are reported at rest.
    fn is_at_rest(&self, block: BlockId) -> bool;

    /// Begin animating the block toward the given cell under gravity.
    fn start_falling(&mut self, block: BlockId, dest: Coord);

    /// Begin animating the block toward a swapped cell.
    fn move_towards(&mut self, block: BlockId, dest: Coord);

    /// Remove the block entity from the world.
    fn destroy(&mut self, block: BlockId);
}

/// Creates new block entities during refill.
pub trait BlockSpawner {
    /// Create a new block entity and return its handle. The board only
    /// records the handle into a slot; color and placement animation are
    /// the host's business.
    fn spawn(&mut self) -> BlockId;
}
