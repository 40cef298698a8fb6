//! Chess board representation and rules.
//!
//! A plain 8x8 square map with side to move, castling rights, en passant
//! target and move counters. Supports the full move rules including castling,
//! en passant and promotion, and classifies checkmate and stalemate.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, GameStatus};
//!
//! let mut board = Board::new();
//! let mv = board.parse_coordinate_move("e2e4").unwrap();
//! board.apply(mv).unwrap();
//! assert_eq!(board.terminal_state(), GameStatus::Ongoing);
//! println!("{}", board.to_fen());
//! ```

mod check;
mod error;
mod fen;
mod legal;
mod make_move;
mod movegen;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use error::{BoardError, CorruptState, FenError, MoveError, MoveParseError, SquareError};
pub use fen::STARTING_FEN;
pub use state::Board;
pub use status::GameStatus;
pub use types::{CastlingRights, Color, Move, MoveKind, MoveList, Piece, PieceKind, Square};

pub(crate) use types::PROMOTION_KINDS;
