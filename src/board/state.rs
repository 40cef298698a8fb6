use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::BoardError;
use super::{CastlingRights, Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

static STARTING_POSITION: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for (file, kind) in BACK_RANK.iter().enumerate() {
        for color in Color::BOTH {
            board.set_piece(Square(file, color.home_rank()), Piece::new(*kind, color));
            board.set_piece(
                Square(file, color.pawn_start_rank()),
                Piece::new(PieceKind::Pawn, color),
            );
        }
    }
    board.castling_rights = CastlingRights::all();
    board
});

/// A chess position.
///
/// Squares are stored rank-major (`squares[rank][file]`) with rank 0 being the
/// eighth rank. Castling rights and the en passant target are derived by
/// [`Board::apply`]; callers only set them through FEN.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Board {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        STARTING_POSITION.clone()
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The piece on `sq`, or `None` for an empty or off-board square.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if sq.is_valid() {
            self.squares[sq.rank()][sq.file()]
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.rank()][sq.file()] = Some(piece);
    }

    #[inline]
    pub(crate) fn take_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank()][sq.file()].take()
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Every occupied square holding a piece of `color`, rank 0 first.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Location of `color`'s king, if it is on the board.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        Square::all().find(|&sq| self.piece_at(sq) == Some(king))
    }

    /// Check that each color has exactly one king.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::BOTH {
            let found = self
                .pieces(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            if found != 1 {
                return Err(BoardError::KingCount { color, found });
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
