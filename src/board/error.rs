//! Error types for chess board operations.

use std::fmt;

use super::{Color, Move};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few or too many parts (needs 4 to 6)
    WrongPartCount { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Castling right whose king or rook is not on its home square
    CastlingWithoutPieces { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square, or one not behind a pawn the opponent just
    /// double-pushed
    InvalidEnPassant { found: String },
    /// Wrong number of ranks in position string
    InvalidRankCount { found: usize },
    /// A rank does not describe exactly eight files
    WrongFileCount { rank: usize, files: usize },
    /// Halfmove clock or fullmove number is not a number
    InvalidCounter { found: String },
    /// Position does not hold exactly one king per color
    InvalidPosition(BoardError),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongPartCount { found } => {
                write!(f, "FEN must have 4 to 6 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::CastlingWithoutPieces { char } => {
                write!(f, "Castling right '{char}' without king and rook at home")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidCounter { found } => {
                write!(f, "Invalid move counter '{found}' in FEN")
            }
            FenError::InvalidPosition(e) => write!(f, "Invalid position: {e}"),
        }
    }
}

impl std::error::Error for FenError {}

impl From<BoardError> for FenError {
    fn from(e: BoardError) -> Self {
        FenError::InvalidPosition(e)
    }
}

/// Error type for coordinate move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// Origin square is empty
    NoPiece { notation: String },
    /// A pawn reaches the last rank but no promotion piece was given
    MissingPromotion { notation: String },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveParseError::NoPiece { notation } => {
                write!(f, "No piece on the origin square of '{notation}'")
            }
            MoveParseError::MissingPromotion { notation } => {
                write!(f, "Move '{notation}' needs a promotion piece")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for applying a move to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The move is not among the legal moves of its origin square
    IllegalMove { mv: Move },
    /// The origin square holds a piece of the side not to move. Such a move
    /// is never in the legal set either; this variant only says why.
    NotYourTurn { mv: Move, side_to_move: Color },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::IllegalMove { mv } => write!(f, "Illegal move '{mv}'"),
            MoveError::NotYourTurn { mv, side_to_move } => {
                write!(f, "Move '{mv}' played out of turn, {side_to_move} to move")
            }
        }
    }
}

impl MoveError {
    /// The rejected move
    #[must_use]
    pub fn mv(&self) -> Move {
        match *self {
            MoveError::IllegalMove { mv } | MoveError::NotYourTurn { mv, .. } => mv,
        }
    }
}

impl std::error::Error for MoveError {}

/// A color's king is missing from the board.
///
/// Unreachable through legal play; seeing it means the board was corrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorruptState {
    pub color: Color,
}

impl fmt::Display for CorruptState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Corrupt board: no {} king", self.color)
    }
}

impl std::error::Error for CorruptState {}

/// Error type for board invariant violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A color has no king, or more than one
    KingCount { color: Color, found: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::KingCount { color, found } => {
                write!(f, "{color} has {found} kings, expected exactly 1")
            }
        }
    }
}

impl std::error::Error for BoardError {}
