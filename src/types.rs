//! Core types shared across the engine
//! This module contains pure data types with no external dependencies

use std::fmt;

/// Default board footprint, matching the original puzzle scene:
/// a 10x10 grid whose bottom-left slot sits at (-5, -5).
pub const DEFAULT_WIDTH: u32 = 10;
pub const DEFAULT_HEIGHT: u32 = 10;
pub const DEFAULT_X_START: i32 = -5;
pub const DEFAULT_Y_START: i32 = -5;

/// Minimum length of a same-color run that scores.
pub const MIN_RUN: usize = 3;

/// Number of distinct block colors drawn by the default spawner.
pub const DEFAULT_PALETTE_SIZE: u8 = 5;

/// Points awarded per destroyed block.
pub const POINTS_PER_BLOCK: u32 = 2;

/// Score a session must exceed before the level can be advanced.
pub const LEVEL_SCORE_THRESHOLD: u32 = 50;

/// Simulation tick length used by the demo driver (milliseconds).
pub const TICK_MS: u32 = 16;

/// Cell edge length in world units (animation targets only).
pub const CELL_SIZE: f32 = 1.0;

/// Fall animation speed (world units per second).
pub const FALL_SPEED: f32 = 4.0;

/// Swap animation speed (world units per second).
pub const SWAP_SPEED: f32 = 6.0;

/// A board coordinate. `y` increases upward, as in the original scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell directly below this one.
    pub fn below(self) -> Self {
        Self::new(self.x, self.y - 1)
    }

    /// The cell directly above this one.
    pub fn above(self) -> Self {
        Self::new(self.x, self.y + 1)
    }

    /// True iff the coordinates differ by exactly one unit on exactly
    /// one axis. Diagonal neighbors are not adjacent.
    pub fn is_adjacent(self, other: Self) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx + dy == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Handle to a block entity owned by the host. The board records
/// occupancy by id and never touches the entity itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(u32);

impl BlockId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block#{}", self.0)
    }
}

/// Opaque color tag. The engine only ever compares tags for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorTag(pub u8);

impl ColorTag {
    /// Single-character glyph for snapshots and debug output.
    pub fn glyph(self) -> char {
        (b'a' + self.0 % 26) as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_rules() {
        let c = Coord::new(0, 0);
        assert!(c.is_adjacent(Coord::new(1, 0)));
        assert!(c.is_adjacent(Coord::new(-1, 0)));
        assert!(c.is_adjacent(Coord::new(0, 1)));
        assert!(c.is_adjacent(Coord::new(0, -1)));

        // Diagonals and self are not adjacent.
        assert!(!c.is_adjacent(Coord::new(1, 1)));
        assert!(!c.is_adjacent(Coord::new(-1, -1)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coord::new(2, 0)));
    }

    #[test]
    fn test_coord_neighbors() {
        let c = Coord::new(3, -2);
        assert_eq!(c.below(), Coord::new(3, -3));
        assert_eq!(c.above(), Coord::new(3, -1));
    }

    #[test]
    fn test_color_glyph() {
        assert_eq!(ColorTag(0).glyph(), 'a');
        assert_eq!(ColorTag(4).glyph(), 'e');
        assert_eq!(ColorTag(26).glyph(), 'a');
    }
}
