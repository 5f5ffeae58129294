//! Board module - owns the slot grid.
//!
//! The board covers the inclusive rectangle
//! `[leftmost_x, rightmost_x] x [bottom_y, top_y]`, fixed at
//! construction. Storage is a flat array in column-major order with `y`
//! ascending, so plain index order walks each column bottom-up - the
//! order the gravity pass wants.

use crate::error::GridError;
use crate::types::{BlockId, Coord};
use crate::world::BlockWorld;

use super::slot::Slot;

/// The full grid of slots plus coordinate lookup and mutation API.
/// The resolution passes live in `core::resolve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) slots: Vec<Slot>,
    width: i32,
    height: i32,
    leftmost_x: i32,
    bottom_y: i32,
}

impl Board {
    /// Create a board of `width * height` slots whose bottom-left slot
    /// sits at `(xstart, ystart)`. The shape never changes afterward.
    pub fn new(width: u32, height: u32, xstart: i32, ystart: i32) -> Self {
        assert!(width > 0 && height > 0, "board must have at least one slot");

        let mut slots = Vec::with_capacity((width * height) as usize);
        for x in xstart..xstart + width as i32 {
            for y in ystart..ystart + height as i32 {
                slots.push(Slot::new(Coord::new(x, y)));
            }
        }

        Self {
            slots,
            width: width as i32,
            height: height as i32,
            leftmost_x: xstart,
            bottom_y: ystart,
        }
    }

    /// Calculate flat index from a coordinate. Column-major, `y` first.
    #[inline]
    pub(crate) fn index(&self, coord: Coord) -> Option<usize> {
        let col = coord.x - self.leftmost_x;
        let row = coord.y - self.bottom_y;
        if col < 0 || col >= self.width || row < 0 || row >= self.height {
            return None;
        }
        Some((col * self.height + row) as usize)
    }

    pub fn width(&self) -> u32 {
        self.width as u32
    }

    pub fn height(&self) -> u32 {
        self.height as u32
    }

    pub fn leftmost_x(&self) -> i32 {
        self.leftmost_x
    }

    pub fn rightmost_x(&self) -> i32 {
        self.leftmost_x + self.width - 1
    }

    pub fn bottom_y(&self) -> i32 {
        self.bottom_y
    }

    pub fn top_y(&self) -> i32 {
        self.bottom_y + self.height - 1
    }

    /// Direct lookup; `None` if out of bounds.
    pub fn slot_at(&self, x: i32, y: i32) -> Option<&Slot> {
        self.index(Coord::new(x, y)).map(|i| &self.slots[i])
    }

    /// All slots, column-major with `y` ascending.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    fn slot_mut(&mut self, coord: Coord) -> Result<&mut Slot, GridError> {
        match self.index(coord) {
            Some(i) => Ok(&mut self.slots[i]),
            None => Err(GridError::OutOfBounds { at: coord }),
        }
    }

    /// Record `block` into the slot at `coord`. Fails on occupied slots
    /// rather than silently replacing the previous occupant.
    pub fn fill_slot(&mut self, coord: Coord, block: BlockId) -> Result<(), GridError> {
        debug_assert!(
            self.slot_of(block).is_none(),
            "{block} is already recorded at another slot"
        );
        self.slot_mut(coord)?.fill(block)
    }

    /// Empty the slot at `coord`, returning the occupant it held.
    /// No-op (returning `None`) when the slot was already empty.
    pub fn clear_slot(&mut self, coord: Coord) -> Result<Option<BlockId>, GridError> {
        Ok(self.slot_mut(coord)?.clear())
    }

    /// Flag the slot at `coord` for staged deletion.
    pub fn mark_for_deletion(&mut self, coord: Coord) -> Result<(), GridError> {
        self.slot_mut(coord)?.mark_for_deletion()
    }

    /// Exchange the occupants of two filled slots and signal both blocks
    /// to move toward their new cells. Adjacency is the input layer's
    /// concern; this only requires two distinct, filled, in-bounds slots.
    pub fn swap_occupants(
        &mut self,
        a: Coord,
        b: Coord,
        world: &mut impl BlockWorld,
    ) -> Result<(), GridError> {
        if a == b {
            return Err(GridError::InvalidSwap { a, b });
        }
        let ia = self.index(a).ok_or(GridError::OutOfBounds { at: a })?;
        let ib = self.index(b).ok_or(GridError::OutOfBounds { at: b })?;
        if !self.slots[ia].is_filled() || !self.slots[ib].is_filled() {
            return Err(GridError::InvalidSwap { a, b });
        }

        // Deletion flags stay with the cells; only the occupants move.
        let block_a = self.slots[ia].take_occupant();
        let block_b = self.slots[ib].take_occupant();
        if let Some(block) = block_b {
            self.slots[ia].put_occupant(block);
            world.move_towards(block, a);
        }
        if let Some(block) = block_a {
            self.slots[ib].put_occupant(block);
            world.move_towards(block, b);
        }
        Ok(())
    }

    /// Destroy the occupant of a filled slot and drop `replacement` into
    /// its place, falling toward the same cell. Returns the destroyed
    /// block's id.
    pub fn replace_occupant(
        &mut self,
        coord: Coord,
        replacement: BlockId,
        world: &mut impl BlockWorld,
    ) -> Result<BlockId, GridError> {
        let slot = self.slot_mut(coord)?;
        let old = match slot.clear() {
            Some(block) => block,
            None => return Err(GridError::SlotEmpty { at: coord }),
        };
        slot.put_occupant(replacement);
        world.destroy(old);
        world.start_falling(replacement, coord);
        Ok(old)
    }

    /// The empty slot with the greatest `y` in column `x`, where new
    /// arrivals enter before falling to rest. `ColumnFull` if the column
    /// has no empty slot; callers must guarantee capacity.
    pub fn bottommost_empty_slot(&self, x: i32) -> Result<&Slot, GridError> {
        if x < self.leftmost_x || x > self.rightmost_x() {
            return Err(GridError::OutOfBounds {
                at: Coord::new(x, self.bottom_y),
            });
        }
        for y in (self.bottom_y..=self.top_y()).rev() {
            if let Some(slot) = self.slot_at(x, y) {
                if !slot.is_filled() {
                    return Ok(slot);
                }
            }
        }
        Err(GridError::ColumnFull { x })
    }

    /// Coordinates of all empty slots in the top row, where the spawner
    /// feeds in replacements.
    pub fn empty_slots_at_top(&self) -> Vec<Coord> {
        let top = self.top_y();
        self.slots
            .iter()
            .filter(|s| s.coord().y == top && !s.is_filled())
            .map(|s| s.coord())
            .collect()
    }

    /// Where a block currently sits, derived by scanning the slot table.
    /// Never cached on the block side; the board is the only source of
    /// truth for occupancy.
    pub fn slot_of(&self, block: BlockId) -> Option<Coord> {
        self.slots
            .iter()
            .find(|s| s.occupant() == Some(block))
            .map(|s| s.coord())
    }

    pub fn any_marked(&self) -> bool {
        self.slots.iter().any(|s| s.is_marked_for_deletion())
    }

    pub fn marked_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_marked_for_deletion()).count()
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_filled()).count()
    }

    /// Render the grid as text, top row first: `.` for empty cells, the
    /// color glyph for filled ones (uppercase when marked for deletion).
    pub fn snapshot(&self, world: &impl BlockWorld) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in (self.bottom_y..=self.top_y()).rev() {
            for x in self.leftmost_x..=self.rightmost_x() {
                let ch = match self.slot_at(x, y) {
                    Some(slot) => match slot.occupant().and_then(|b| world.color(b)) {
                        Some(color) if slot.is_marked_for_deletion() => {
                            color.glyph().to_ascii_uppercase()
                        }
                        Some(color) => color.glyph(),
                        None => '.',
                    },
                    None => ' ',
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}
