//! Terminal state classification and move-tree counting.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color};

/// Whether a side can still move, and if not, why.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Board {
    /// Classify `color`'s position: ongoing while any of its pieces has a
    /// legal move, otherwise checkmate if in check and stalemate if not.
    #[must_use]
    pub fn evaluate(&self, color: Color) -> GameStatus {
        let can_move = self
            .pieces(color)
            .any(|(from, _)| !self.legal_moves(from).is_empty());
        if can_move {
            GameStatus::Ongoing
        } else if self.is_in_check(color) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }

    /// [`Board::evaluate`] for the side to move.
    #[must_use]
    pub fn terminal_state(&self) -> GameStatus {
        self.evaluate(self.side_to_move)
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.terminal_state() == GameStatus::Checkmate
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.terminal_state() == GameStatus::Stalemate
    }

    /// Count the leaves of the legal move tree `depth` plies deep.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.all_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .into_iter()
            .map(|mv| {
                let mut next = self.clone();
                next.make_move(mv);
                next.perft(depth - 1)
            })
            .sum()
    }
}
