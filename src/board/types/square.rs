//! Square type and algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, represented as a 0-63 index.
///
/// Index 0 is a8 (Black's back rank, queenside corner) and index 63 is h1;
/// `row = index / 8` counts down from Black's side of the board and
/// `column = index % 8` counts from the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board
    pub const COUNT: usize = 64;

    /// Create a new square with bounds checking
    #[inline]
    #[must_use]
    pub fn new(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Create a square from a row and column, both 0-7
    #[inline]
    #[must_use]
    pub fn at(row: usize, column: usize) -> Option<Self> {
        if row < 8 && column < 8 {
            Some(Square((row * 8 + column) as u8))
        } else {
            None
        }
    }

    // Caller guarantees idx < 64.
    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Square(idx as u8)
    }

    /// Get the square's index (0-63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the row (0-7, where 0 = Black's back rank)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / 8
    }

    /// Get the column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self.0 as usize % 8
    }

    /// Offset this square by a board-index delta, returning `None` when the
    /// step leaves the board or wraps around an edge.
    ///
    /// A step wraps when either the row or column changes by more than one,
    /// which is exactly the artifact a raw index offset produces at the board
    /// edge.
    #[inline]
    #[must_use]
    pub(crate) fn offset(self, delta: i32) -> Option<Square> {
        let from = self.0 as i32;
        let to = from + delta;
        if !(0..64).contains(&to) {
            return None;
        }
        let row_jump = (to / 8 - from / 8).abs();
        let col_jump = (to % 8 - from % 8).abs();
        if row_jump > 1 || col_jump > 1 {
            return None;
        }
        Some(Square(to as u8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.column() as u8) as char, 8 - self.row())
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Square::new(index).ok_or(SquareError::IndexOutOfBounds { index })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let column = match chars[0] {
            'a'..='h' => chars[0] as usize - 'a' as usize,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let row = match chars[1] {
            '1'..='8' => 8 - (chars[1] as usize - '0' as usize),
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Square((row * 8 + column) as u8))
    }
}
