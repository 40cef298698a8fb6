use super::super::{Board, Color, Piece, PieceKind, Square};

impl Board {
    pub(crate) fn pawn_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        let mut destinations = Vec::new();
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(0, dir) {
            if self.is_empty(forward) {
                destinations.push(forward);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = forward.offset(0, dir) {
                        if self.is_empty(double) {
                            destinations.push(double);
                        }
                    }
                }
            }
        }

        for d_file in [-1, 1] {
            let Some(target) = from.offset(d_file, dir) else {
                continue;
            };
            match self.piece_at(target) {
                Some(piece) if piece.color != color => destinations.push(target),
                Some(_) => {}
                None if self.is_en_passant_capture(from, target, color) => {
                    destinations.push(target)
                }
                None => {}
            }
        }

        destinations
    }

    /// True when a pawn of `color` on `from` may capture en passant onto `target`.
    ///
    /// The target only belongs to the side to move, and the pawn that made
    /// the double push must still stand beside the capturer.
    pub(crate) fn is_en_passant_capture(&self, from: Square, target: Square, color: Color) -> bool {
        self.en_passant_target == Some(target)
            && color == self.side_to_move
            && from.file().abs_diff(target.file()) == 1
            && self.piece_at(Square(target.file(), from.rank()))
                == Some(Piece::new(PieceKind::Pawn, color.opponent()))
    }
}
