//! gridfall - a headless match-3 grid engine.
//!
//! The board tracks filled/empty slots, resolves gravity one row per
//! tick, detects same-color runs of three or more along rows and
//! columns, stages their deletion one slot per tick, and reports where
//! refills should enter. Rendering, input, physics, and audio live on
//! the host side of the [`world`] traits; the engine only records
//! occupancy and polls whether blocks are at rest.
//!
//! The driving loop calls, once per tick and in order:
//! `resolve_falling`, `resolve_scoring`, `resolve_deletion`, then spawns
//! into `empty_slots_at_top`. [`engine::PuzzleSession`] packages exactly
//! that loop together with score and level progress.

pub mod core;
pub mod engine;
pub mod error;
pub mod types;
pub mod world;

pub use crate::core::Board;
pub use crate::error::GridError;
pub use crate::types::{BlockId, ColorTag, Coord};
pub use crate::world::{BlockSpawner, BlockWorld};
