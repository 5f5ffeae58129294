//! Slot module - one addressable cell of the board.
//!
//! A slot holds at most one occupant handle and a transient deletion
//! flag. All mutation goes through the owning `Board`, which keeps the
//! slot table the single source of truth for occupancy.

use crate::error::GridError;
use crate::types::{BlockId, Coord};

/// One grid cell. Created with the board, never destroyed; only the
/// occupant and deletion flag ever change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    coord: Coord,
    occupant: Option<BlockId>,
    marked_for_deletion: bool,
}

impl Slot {
    pub(crate) fn new(coord: Coord) -> Self {
        Self {
            coord,
            occupant: None,
            marked_for_deletion: false,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn occupant(&self) -> Option<BlockId> {
        self.occupant
    }

    pub fn is_filled(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn is_marked_for_deletion(&self) -> bool {
        self.marked_for_deletion
    }

    /// True iff the two slots are exactly one cell apart on one axis.
    pub fn is_adjacent_to(&self, other: &Slot) -> bool {
        self.coord.is_adjacent(other.coord)
    }

    /// Record an occupant. Rejects overwrites: callers check
    /// `is_filled` first or handle the error.
    pub(crate) fn fill(&mut self, block: BlockId) -> Result<(), GridError> {
        if self.occupant.is_some() {
            return Err(GridError::SlotOccupied { at: self.coord });
        }
        self.occupant = Some(block);
        Ok(())
    }

    /// Empty the slot. Also drops any pending deletion mark, so
    /// "marked implies filled" holds at all times.
    pub(crate) fn clear(&mut self) -> Option<BlockId> {
        self.marked_for_deletion = false;
        self.occupant.take()
    }

    /// Remove the occupant without touching the deletion flag.
    /// Used by swap, where the flag belongs to the cell, not the block.
    pub(crate) fn take_occupant(&mut self) -> Option<BlockId> {
        self.occupant.take()
    }

    /// Record an occupant into a slot already known to be empty.
    pub(crate) fn put_occupant(&mut self, block: BlockId) {
        debug_assert!(self.occupant.is_none(), "put into filled slot {}", self.coord);
        self.occupant = Some(block);
    }

    /// Flag the occupant for staged deletion. Idempotent; only filled
    /// slots can be marked.
    pub(crate) fn mark_for_deletion(&mut self) -> Result<(), GridError> {
        if self.occupant.is_none() {
            return Err(GridError::SlotEmpty { at: self.coord });
        }
        self.marked_for_deletion = true;
        Ok(())
    }
}
