//! Core module - pure grid logic with no I/O.
//!
//! The board and its resolution passes know nothing about rendering,
//! input, physics, or persistence; those arrive through the collaborator
//! traits in [`crate::world`].

pub mod board;
pub mod rng;
pub mod slot;

mod resolve;

pub use board::Board;
pub use rng::{ColorPicker, SimpleRng};
pub use slot::Slot;
