//! Core chess types.
//!
//! This module contains the fundamental value types used by the rules engine:
//! - `PieceKind`, `Color` and `Piece` - tagged piece identity
//! - `Square` - (file, rank) board coordinate
//! - `Move`, `MoveKind` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveKind, MoveList};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use piece::PROMOTION_KINDS;
