//! Error types for the Hex engine

use thiserror::Error;

use crate::board::Coord;

/// Errors raised by board construction, bounds-checked reads and configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("invalid board size {0}: must be between 1 and {max}", max = i32::MAX)]
    InvalidSize(usize),

    #[error("coordinate {coord} is outside a {size}x{size} board")]
    OutOfBounds { coord: Coord, size: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no legal move available")]
    NoMoveAvailable,

    #[error("move played out of turn")]
    OutOfTurn,
}

pub type Result<T> = std::result::Result<T, HexError>;
