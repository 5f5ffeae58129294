//! Engine module - the glue a host needs around the core board:
//! tick orchestration, reference motion/world implementations, and
//! persistent progress.

pub mod motion;
pub mod session;
pub mod sim;
pub mod stars;

pub use motion::{cell_center, position_along, BlockMotion};
pub use session::{PuzzleSession, TickReport};
pub use sim::SimWorld;
pub use stars::StarLedger;
