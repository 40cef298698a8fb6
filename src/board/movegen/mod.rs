//! Pseudo-legal destination generation.
//!
//! Destinations follow each piece's movement pattern and ignore whether the
//! mover's own king is left attacked. `attack_only` suppresses castling so
//! that check detection can reuse this generator without re-entering itself.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, PieceKind, Square};

pub(crate) use kings::KING_HOME_FILE;

pub(crate) const ORTHOGONALS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Destinations for the piece on `from`, ignoring self-check.
    ///
    /// Off-board or empty squares yield no destinations. With `attack_only`
    /// set, castling destinations are not produced.
    #[must_use]
    pub fn pseudo_legal(&self, from: Square, attack_only: bool) -> Vec<Square> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };

        match piece.kind {
            PieceKind::Pawn => self.pawn_destinations(from, piece.color),
            PieceKind::Knight => self.knight_destinations(from, piece.color),
            PieceKind::Bishop => self.slider_destinations(from, piece.color, &DIAGONALS),
            PieceKind::Rook => self.slider_destinations(from, piece.color, &ORTHOGONALS),
            PieceKind::Queen => self.slider_destinations(from, piece.color, &ALL_DIRECTIONS),
            PieceKind::King => {
                let mut destinations = self.king_step_destinations(from, piece.color);
                if !attack_only {
                    destinations.extend(self.castling_destinations(from, piece.color));
                }
                destinations
            }
        }
    }
}
