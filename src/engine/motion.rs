//! Block motion - pure interpolation toward a target cell.
//!
//! The board only ever asks "is this block at rest"; how a block gets to
//! its cell is presentation-layer business. This module gives hosts a
//! ready-made answer: an explicit per-block state advanced by elapsed
//! time, instead of physics-driven tweening with position snapping.

use crate::types::Coord;

/// A position in world units.
pub type WorldPos = (f32, f32);

/// Center of a cell in world units.
pub fn cell_center(coord: Coord, cell_size: f32) -> WorldPos {
    (
        (coord.x as f32 + 0.5) * cell_size,
        (coord.y as f32 + 0.5) * cell_size,
    )
}

/// Where a block travelling from `start` to `end` at `speed` units per
/// second sits after `elapsed` seconds. Clamps at `end`.
pub fn position_along(start: WorldPos, end: WorldPos, elapsed: f32, speed: f32) -> WorldPos {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let dist = (dx * dx + dy * dy).sqrt();
    let travelled = speed * elapsed;
    if travelled >= dist || dist == 0.0 {
        return end;
    }
    let t = travelled / dist;
    (start.0 + dx * t, start.1 + dy * t)
}

/// Animation state for one block: either at rest on its target or
/// partway along a straight line toward it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockMotion {
    start: WorldPos,
    target: WorldPos,
    elapsed: f32,
    speed: f32,
    moving: bool,
}

impl BlockMotion {
    /// A block resting at `pos`.
    pub fn at(pos: WorldPos) -> Self {
        Self {
            start: pos,
            target: pos,
            elapsed: 0.0,
            speed: 0.0,
            moving: false,
        }
    }

    /// Begin moving from the current position toward `target`. An
    /// infinite speed snaps there immediately.
    pub fn start_toward(&mut self, target: WorldPos, speed: f32) {
        self.start = self.position();
        self.target = target;
        self.elapsed = 0.0;
        self.speed = speed;
        self.moving = !speed.is_infinite();
    }

    /// Advance the animation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if !self.moving {
            return;
        }
        self.elapsed += dt;
        if self.position() == self.target {
            self.moving = false;
        }
    }

    pub fn position(&self) -> WorldPos {
        if self.moving {
            position_along(self.start, self.target, self.elapsed, self.speed)
        } else {
            self.target
        }
    }

    pub fn is_at_rest(&self) -> bool {
        !self.moving
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_along_clamps_at_end() {
        let start = (0.0, 0.0);
        let end = (0.0, -3.0);
        assert_eq!(position_along(start, end, 0.0, 1.0), start);
        assert_eq!(position_along(start, end, 1.5, 1.0), (0.0, -1.5));
        assert_eq!(position_along(start, end, 3.0, 1.0), end);
        assert_eq!(position_along(start, end, 99.0, 1.0), end);
    }

    #[test]
    fn test_position_along_degenerate_segment() {
        let p = (2.0, 2.0);
        assert_eq!(position_along(p, p, 0.5, 1.0), p);
    }

    #[test]
    fn test_motion_reaches_target() {
        let mut m = BlockMotion::at((0.0, 4.0));
        m.start_toward((0.0, 0.0), 2.0);
        assert!(!m.is_at_rest());

        m.advance(1.0);
        assert_eq!(m.position(), (0.0, 2.0));
        m.advance(1.0);
        assert!(m.is_at_rest());
        assert_eq!(m.position(), (0.0, 0.0));
    }

    #[test]
    fn test_retarget_mid_flight_starts_from_current_position() {
        let mut m = BlockMotion::at((0.0, 0.0));
        m.start_toward((4.0, 0.0), 1.0);
        m.advance(1.0);
        m.start_toward((0.0, 0.0), 1.0);
        assert_eq!(m.position(), (1.0, 0.0));
        // One unit back to the origin from where the retarget caught it.
        m.advance(0.25);
        assert!(!m.is_at_rest());
        m.advance(0.75);
        assert!(m.is_at_rest());
    }

    #[test]
    fn test_infinite_speed_snaps() {
        let mut m = BlockMotion::at((0.0, 9.0));
        m.start_toward((0.0, 0.0), f32::INFINITY);
        assert!(m.is_at_rest());
        assert_eq!(m.position(), (0.0, 0.0));
    }

    #[test]
    fn test_cell_center() {
        assert_eq!(cell_center(Coord::new(0, 0), 1.0), (0.5, 0.5));
        assert_eq!(cell_center(Coord::new(-5, 2), 2.0), (-9.0, 5.0));
    }
}
