//! Square type and algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::MoveParseError;

/// A board square, stored as a compact 0-63 index.
///
/// Index layout: `row * 8 + col`, where row 0 is Black's back rank and
/// row 7 is White's back rank. In algebraic notation the rank digit is
/// therefore `8 - row`: a8 = index 0, h1 = index 63.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square from row and col (both 0-7).
    /// Does not perform bounds checking - use `try_new` for checked
    /// construction.
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Square((row * 8 + col) as u8)
    }

    /// Create a square with bounds checking.
    #[must_use]
    pub const fn try_new(row: isize, col: isize) -> Option<Self> {
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Row (0-7, where 0 = Black's back rank).
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        (self.0 / 8) as usize
    }

    /// Column (0-7, where 0 = file a).
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        (self.0 % 8) as usize
    }

    /// The square's index (0-63, `row * 8 + col`).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Create a square from an index (0-63).
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx as u8)
    }

    /// Mirror the square across the horizontal midline (a1 <-> a8).
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square::new(7 - self.row(), self.col())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (self.col() as u8 + b'a') as char,
            8 - self.row()
        )
    }
}

impl FromStr for Square {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(MoveParseError::InvalidSquare {
                notation: s.to_string(),
            });
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(MoveParseError::InvalidSquare {
                notation: s.to_string(),
            });
        }
        let col = file as usize - 'a' as usize;
        let row = 8 - (rank as usize - '0' as usize);
        Ok(Square::new(row, col))
    }
}
