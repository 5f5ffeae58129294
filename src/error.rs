//! Error types for fallible board operations.
//!
//! Every failure here is local: the caller decides whether to log,
//! ignore, or abort. Nothing is retried and nothing is process-fatal.

use std::error::Error;
use std::fmt;

use crate::types::Coord;

/// Errors returned by `Board` mutation and query operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate outside the board rectangle.
    OutOfBounds { at: Coord },
    /// Fill attempted on a slot that already holds a block.
    SlotOccupied { at: Coord },
    /// Operation requires a filled slot.
    SlotEmpty { at: Coord },
    /// Swap attempted on an empty slot, or a slot with itself.
    InvalidSwap { a: Coord, b: Coord },
    /// Column has no empty slot left.
    ColumnFull { x: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { at } => write!(f, "coordinate {at} is outside the board"),
            Self::SlotOccupied { at } => write!(f, "slot {at} already holds a block"),
            Self::SlotEmpty { at } => write!(f, "slot {at} is empty"),
            Self::InvalidSwap { a, b } => write!(f, "cannot swap slots {a} and {b}"),
            Self::ColumnFull { x } => write!(f, "column {x} has no empty slot"),
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let at = Coord::new(-6, 2);
        assert_eq!(
            GridError::OutOfBounds { at }.to_string(),
            "coordinate (-6, 2) is outside the board"
        );
        assert_eq!(
            GridError::ColumnFull { x: 3 }.to_string(),
            "column 3 has no empty slot"
        );
    }
}
