//! Resolution passes - gravity, match scoring, staged deletion.
//!
//! The driving loop invokes the passes once per tick in a fixed order:
//! falling, then (when nothing is moving or pending deletion) scoring,
//! then deletion. Each pass is synchronous and runs to completion; the
//! only asynchrony is the host animating blocks between ticks.

use smallvec::SmallVec;

use crate::types::{Coord, MIN_RUN};
use crate::world::BlockWorld;

use super::board::Board;

impl Board {
    /// True iff every occupant reports itself at rest. Gates scoring and
    /// player interaction while animations are in flight.
    pub fn all_slots_still(&self, world: &impl BlockWorld) -> bool {
        self.slots
            .iter()
            .all(|s| s.occupant().map_or(true, |b| world.is_at_rest(b)))
    }

    /// Gravity pass: every filled, unmarked slot above an empty cell
    /// moves its occupant down exactly one row and signals the block to
    /// fall toward the new cell. Returns the number of blocks moved.
    ///
    /// Slot order is column-major bottom-up, so a column stacked above a
    /// hole shifts together within one pass while each block still moves
    /// at most one row per invocation. Repeated ticks cascade the rest
    /// of the way; the settled result does not depend on the order.
    pub fn resolve_falling(&mut self, world: &mut impl BlockWorld) -> usize {
        let bottom = self.bottom_y();
        let mut moved = 0;

        for i in 0..self.slots.len() {
            let slot = self.slots[i];
            if slot.coord().y == bottom {
                continue;
            }
            if !slot.is_filled() || slot.is_marked_for_deletion() {
                continue;
            }

            let below = slot.coord().below();
            let bi = match self.index(below) {
                Some(bi) => bi,
                None => continue,
            };
            if self.slots[bi].is_filled() {
                continue;
            }

            if let Some(block) = self.slots[i].take_occupant() {
                self.slots[bi].put_occupant(block);
                world.start_falling(block, below);
                moved += 1;
            }
        }
        moved
    }

    /// Match pass: partition every row and every column into maximal
    /// contiguous same-color runs and mark each run of length >= 3 for
    /// deletion. Returns the number of newly marked slots.
    ///
    /// Runs early only when every block is at rest and nothing is
    /// already pending deletion, so mid-cascade boards are never scanned
    /// and pending deletions never compound.
    pub fn resolve_scoring(&mut self, world: &impl BlockWorld) -> usize {
        if self.any_marked() || !self.all_slots_still(world) {
            return 0;
        }

        let (left, right) = (self.leftmost_x(), self.rightmost_x());
        let (bottom, top) = (self.bottom_y(), self.top_y());
        let mut marked = 0;

        for y in bottom..=top {
            marked += self.mark_runs_in_line((left..=right).map(|x| Coord::new(x, y)), world);
        }
        for x in left..=right {
            marked += self.mark_runs_in_line((bottom..=top).map(|y| Coord::new(x, y)), world);
        }
        marked
    }

    /// Walk one line of cells, min to max, collecting contiguous
    /// same-color runs. Empty cells and color changes terminate a run.
    /// Marks set earlier in the same pass do not break runs; a slot at
    /// the intersection of a row run and a column run is marked once.
    fn mark_runs_in_line(
        &mut self,
        line: impl Iterator<Item = Coord>,
        world: &impl BlockWorld,
    ) -> usize {
        let mut run: SmallVec<[Coord; 8]> = SmallVec::new();
        let mut run_color = None;
        let mut marked = 0;

        for coord in line {
            let color = self
                .slot_at(coord.x, coord.y)
                .and_then(|s| s.occupant())
                .and_then(|b| world.color(b));

            if color.is_some() && color == run_color {
                run.push(coord);
                continue;
            }
            marked += self.mark_run(&run);
            run.clear();
            run_color = color;
            if color.is_some() {
                run.push(coord);
            }
        }
        marked + self.mark_run(&run)
    }

    fn mark_run(&mut self, run: &[Coord]) -> usize {
        if run.len() < MIN_RUN {
            return 0;
        }
        let mut newly = 0;
        for &coord in run {
            if let Some(i) = self.index(coord) {
                if !self.slots[i].is_marked_for_deletion()
                    && self.slots[i].mark_for_deletion().is_ok()
                {
                    newly += 1;
                }
            }
        }
        newly
    }

    /// Deletion pass: clear at most one marked slot, signalling the host
    /// to destroy its occupant, and reset that slot's flag. Destruction
    /// is deliberately spread across ticks so the presentation layer can
    /// pace it. Returns the cleared coordinate, if any.
    pub fn resolve_deletion(&mut self, world: &mut impl BlockWorld) -> Option<Coord> {
        let i = self
            .slots
            .iter()
            .position(|s| s.is_marked_for_deletion() && s.is_filled())?;
        let coord = self.slots[i].coord();
        let block = self.slots[i].clear()?;
        log::debug!("destroying {block} at {coord}");
        world.destroy(block);
        Some(coord)
    }
}
