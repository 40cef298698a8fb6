use super::super::{Board, Color, Piece, PieceKind, Square};
use super::ALL_DIRECTIONS;

/// King file at the start of the game
pub(crate) const KING_HOME_FILE: usize = 4;

impl Board {
    pub(crate) fn king_step_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        self.leaper_destinations(from, color, &ALL_DIRECTIONS)
    }

    /// Castling candidates: the king is home, the right is intact, the rook is
    /// on its corner and every square between them is empty. Attacked-square
    /// checks happen during legality filtering.
    pub(crate) fn castling_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        let mut destinations = Vec::new();
        let rank = color.home_rank();
        if from != Square(KING_HOME_FILE, rank) {
            return destinations;
        }

        let own_rook = Some(Piece::new(PieceKind::Rook, color));
        if self.castling_rights.has(color, true)
            && self.is_empty(Square(5, rank))
            && self.is_empty(Square(6, rank))
            && self.piece_at(Square(7, rank)) == own_rook
        {
            destinations.push(Square(6, rank));
        }
        if self.castling_rights.has(color, false)
            && self.is_empty(Square(1, rank))
            && self.is_empty(Square(2, rank))
            && self.is_empty(Square(3, rank))
            && self.piece_at(Square(0, rank)) == own_rook
        {
            destinations.push(Square(2, rank));
        }
        destinations
    }
}
