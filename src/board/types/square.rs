//! Square type and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, represented as (file, rank).
///
/// Files run a..h as 0..7. Ranks are counted from Black's side: rank index 0
/// is the eighth rank and rank index 7 is White's home rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (file, rank)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(file: usize, rank: usize) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(file, rank))
        } else {
            None
        }
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.0
    }

    /// Get the rank index (0-7, where 0 = the eighth rank)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.1
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// Step by a (file, rank) delta, returning `None` off the board
    #[inline]
    #[must_use]
    pub(crate) fn offset(self, d_file: isize, d_rank: isize) -> Option<Square> {
        let file = self.0 as isize + d_file;
        let rank = self.1 as isize + d_rank;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square(file as usize, rank as usize))
        } else {
            None
        }
    }

    /// Iterate every square, rank 0 first, files a..h within a rank
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|rank| (0..8).map(move |file| Square(file, rank)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "??");
        }
        write!(f, "{}{}", (self.0 as u8 + b'a') as char, 8 - self.1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square(file, rank))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as usize,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => 7 - (b - b'1') as usize,
            _ => return Err(invalid()),
        };
        Ok(Square(file, rank))
    }
}
