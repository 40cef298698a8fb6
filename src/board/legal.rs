//! Legality filtering: pseudo-legal destinations to legal moves.

use super::movegen::KING_HOME_FILE;
use super::{Board, Color, Move, MoveList, Piece, PieceKind, Square, PROMOTION_KINDS};

impl Board {
    /// Legal moves for the piece on `from`, in generation order.
    ///
    /// Each candidate is played out on a copy of the board (captures, the en
    /// passant victim and the castling rook included) and kept only if the
    /// mover's king is not attacked afterwards. Castling additionally needs
    /// the king's start, transit and destination squares to be safe.
    /// Off-board or empty squares yield no moves.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> MoveList {
        let Some(piece) = self.piece_at(from) else {
            return MoveList::new();
        };

        let mut moves = MoveList::new();
        for to in self.pseudo_legal(from, false) {
            for mv in self.candidate_moves(from, to, piece) {
                if mv.is_castling() && !self.castling_path_is_safe(mv, piece.color) {
                    continue;
                }
                let mut next = self.clone();
                next.relocate(mv);
                if !next.is_in_check(piece.color) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    /// Legal moves of every piece of the side to move.
    #[must_use]
    pub fn all_legal_moves(&self) -> MoveList {
        self.pieces(self.side_to_move)
            .flat_map(|(from, _)| self.legal_moves(from))
            .collect()
    }

    /// Squares of `color`'s pieces that have at least one legal move.
    #[must_use]
    pub fn movable_pieces(&self, color: Color) -> Vec<Square> {
        self.pieces(color)
            .filter(|&(from, _)| !self.legal_moves(from).is_empty())
            .map(|(from, _)| from)
            .collect()
    }

    /// Resolve an origin/destination pair (plus promotion piece) to the
    /// matching legal move.
    #[must_use]
    pub fn find_move(&self, from: Square, to: Square, promotion: Option<PieceKind>) -> Option<Move> {
        self.legal_moves(from)
            .into_iter()
            .find(|mv| mv.to == to && mv.promotion == promotion)
    }

    /// Label a pseudo-legal destination with its move kind; promotions fan
    /// out into one move per promotion piece.
    fn candidate_moves(&self, from: Square, to: Square, piece: Piece) -> Vec<Move> {
        match piece.kind {
            PieceKind::King if from.file().abs_diff(to.file()) == 2 => {
                if to.file() > from.file() {
                    vec![Move::castle_kingside(from, to)]
                } else {
                    vec![Move::castle_queenside(from, to)]
                }
            }
            PieceKind::Pawn if to.rank() == piece.color.pawn_promotion_rank() => PROMOTION_KINDS
                .iter()
                .map(|&kind| Move::promotion(from, to, kind))
                .collect(),
            PieceKind::Pawn
                if from.file() != to.file()
                    && self.is_empty(to)
                    && self.is_en_passant_capture(from, to, piece.color) =>
            {
                vec![Move::en_passant(from, to)]
            }
            _ => vec![Move::new(from, to)],
        }
    }

    /// The king may not castle out of, through, or into check.
    fn castling_path_is_safe(&self, mv: Move, color: Color) -> bool {
        let transit_file = if mv.to.file() > KING_HOME_FILE {
            KING_HOME_FILE + 1
        } else {
            KING_HOME_FILE - 1
        };
        let transit = Square(transit_file, mv.from.rank());

        !self.is_in_check(color)
            && !self.king_attacked_on(mv.from, transit, color)
            && !self.king_attacked_on(mv.from, mv.to, color)
    }

    /// Would `color`'s king, moved from `king_from` to `square`, be in check?
    fn king_attacked_on(&self, king_from: Square, square: Square, color: Color) -> bool {
        let mut trial = self.clone();
        if let Some(king) = trial.take_piece(king_from) {
            trial.set_piece(square, king);
        }
        trial.is_in_check(color)
    }
}
