//! Error types for board operations.

use std::fmt;

use super::types::Square;

/// Error type for move application failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The origin square holds no piece
    EmptyOrigin { square: Square },
    /// The destination holds a piece of the moving side
    FriendlyCapture { from: Square, to: Square },
    /// The move's snapshot does not match the board
    InconsistentMove { from: Square },
    /// Undo was requested with no moves in the history
    EmptyHistory,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptyOrigin { square } => {
                write!(f, "No piece on origin square {square}")
            }
            MoveError::FriendlyCapture { from, to } => {
                write!(f, "Move {from}{to} would capture a friendly piece")
            }
            MoveError::InconsistentMove { from } => {
                write!(f, "Move snapshot from {from} does not match the board")
            }
            MoveError::EmptyHistory => write!(f, "No move to undo"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Index out of bounds (must be 0-63)
    IndexOutOfBounds { index: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
