#[macro_use]
mod logging;

pub mod board;
pub mod engine;
pub mod sync;
pub mod uci;

pub use board::{Board, Color, GameStatus, Move, Piece, PieceKind, Square};
pub use engine::{AnalysisEngine, ControllerConfig, GameController};
