//! Session module - drives the board through the per-tick pass order.
//!
//! One `tick` runs gravity, then (guarded) match scoring, then one step
//! of staged deletion, then refills the top row through the spawner.
//! Score accrues per destroyed block; past the level threshold the
//! caller may advance the level, banking a star in the ledger.

use crate::core::Board;
use crate::types::{Coord, LEVEL_SCORE_THRESHOLD, POINTS_PER_BLOCK};
use crate::world::{BlockSpawner, BlockWorld};

use super::stars::StarLedger;

/// What one tick did, for observers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Blocks moved down one row by the gravity pass.
    pub fell: usize,
    /// Slots newly marked by the match pass.
    pub newly_marked: usize,
    /// Slot cleared by the deletion pass, if any.
    pub deleted: Option<Coord>,
    /// Blocks spawned into the top row.
    pub spawned: usize,
}

/// A running puzzle level: a board plus score state.
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    board: Board,
    score: u32,
    score_threshold: u32,
}

impl PuzzleSession {
    pub fn new(width: u32, height: u32, xstart: i32, ystart: i32) -> Self {
        Self {
            board: Board::new(width, height, xstart, ystart),
            score: 0,
            score_threshold: LEVEL_SCORE_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.score_threshold = threshold;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// True once the score has passed the level threshold.
    pub fn level_complete(&self) -> bool {
        self.score > self.score_threshold
    }

    /// Run one simulation tick. The host is both the block world and the
    /// spawner; a single type usually implements both.
    pub fn tick<W>(&mut self, host: &mut W) -> TickReport
    where
        W: BlockWorld + BlockSpawner,
    {
        let fell = self.board.resolve_falling(host);
        let newly_marked = self.board.resolve_scoring(host);

        let deleted = self.board.resolve_deletion(host);
        if deleted.is_some() {
            self.score += POINTS_PER_BLOCK;
        }

        let mut spawned = 0;
        for coord in self.board.empty_slots_at_top() {
            let block = host.spawn();
            match self.board.fill_slot(coord, block) {
                Ok(()) => {
                    host.start_falling(block, coord);
                    spawned += 1;
                }
                // The slot was reported empty just above; don't leak the
                // entity if that ever stops holding.
                Err(_) => host.destroy(block),
            }
        }

        TickReport {
            fell,
            newly_marked,
            deleted,
            spawned,
        }
    }

    /// Finish the level: bank a star, wipe the board (destroying every
    /// remaining block), and reset the score. Fails quietly when the
    /// threshold has not been passed.
    pub fn advance_level<W: BlockWorld>(&mut self, host: &mut W, ledger: &mut StarLedger) -> bool {
        if !self.level_complete() {
            return false;
        }
        log::info!("level complete at score {}, star banked", self.score);
        ledger.add_star();

        for coord in self.filled_coords() {
            if let Ok(Some(block)) = self.board.clear_slot(coord) {
                host.destroy(block);
            }
        }
        self.score = 0;
        true
    }

    fn filled_coords(&self) -> Vec<Coord> {
        self.board
            .slots()
            .iter()
            .filter(|s| s.is_filled())
            .map(|s| s.coord())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SimWorld;
    use crate::types::ColorTag;

    #[test]
    fn test_tick_refills_top_row() {
        let mut world = SimWorld::instant(1, 5);
        let mut session = PuzzleSession::new(4, 4, 0, 0);

        let report = session.tick(&mut world);
        assert_eq!(report.spawned, 4);
        assert_eq!(session.board().filled_count(), 4);
        for x in 0..4 {
            assert!(session.board().slot_at(x, 3).unwrap().is_filled());
        }
    }

    #[test]
    fn test_score_accrues_per_deleted_block() {
        let mut world = SimWorld::instant(1, 5);
        let mut session = PuzzleSession::new(3, 1, 0, 0);
        for x in 0..3 {
            let id = world.insert(ColorTag(0));
            session.board_mut().fill_slot(Coord::new(x, 0), id).unwrap();
        }

        // Tick 1 marks the run and deletes its first block; the next two
        // ticks only delete (scoring stays off while marks are pending).
        let report = session.tick(&mut world);
        assert_eq!(report.newly_marked, 3);
        assert!(report.deleted.is_some());
        assert_eq!(session.score(), POINTS_PER_BLOCK);

        session.tick(&mut world);
        session.tick(&mut world);
        assert_eq!(session.score(), 3 * POINTS_PER_BLOCK);
        assert!(!session.board().any_marked());
    }

    #[test]
    fn test_advance_level_banks_star_and_wipes_board() {
        let mut world = SimWorld::instant(1, 5);
        let mut ledger = StarLedger::new();
        let mut session = PuzzleSession::new(3, 1, 0, 0).with_threshold(4);
        for x in 0..3 {
            let id = world.insert(ColorTag(0));
            session.board_mut().fill_slot(Coord::new(x, 0), id).unwrap();
        }
        for _ in 0..3 {
            session.tick(&mut world);
        }
        assert!(session.level_complete());

        assert!(session.advance_level(&mut world, &mut ledger));
        assert_eq!(ledger.stars(), 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.board().filled_count(), 0);
    }

    #[test]
    fn test_advance_level_requires_threshold() {
        let mut world = SimWorld::instant(1, 5);
        let mut ledger = StarLedger::new();
        let mut session = PuzzleSession::new(3, 3, 0, 0).with_threshold(10);
        assert!(!session.advance_level(&mut world, &mut ledger));
        assert_eq!(ledger.stars(), 0);
    }
}
