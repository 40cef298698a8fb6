use super::error::MoveError;
use super::{Board, Color, Move, MoveKind, Piece, PieceKind, Square};

/// Corners whose rook, when it moves or is captured, ends a castling right.
const ROOK_CORNERS: [(Square, Color, bool); 4] = [
    (Square(7, 7), Color::White, true),
    (Square(0, 7), Color::White, false),
    (Square(7, 0), Color::Black, true),
    (Square(0, 0), Color::Black, false),
];

impl Board {
    /// Play a legal move, updating every derived field.
    ///
    /// # Errors
    ///
    /// Fails without touching the board whenever `mv` is not in
    /// [`Board::legal_moves`]. A move by the side not to move is reported as
    /// [`MoveError::NotYourTurn`] so callers can tell whose turn it is;
    /// every other rejection is [`MoveError::IllegalMove`]. Both carry the
    /// move, see [`MoveError::mv`].
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        let piece = self.piece_at(mv.from).ok_or(MoveError::IllegalMove { mv })?;
        if piece.color != self.side_to_move {
            return Err(MoveError::NotYourTurn {
                mv,
                side_to_move: self.side_to_move,
            });
        }
        if !self.legal_moves(mv.from).contains(&mv) {
            return Err(MoveError::IllegalMove { mv });
        }

        self.make_move(mv);
        log_debug!("{} played {mv}", piece.color);
        Ok(())
    }

    /// Apply `mv` without legality checks. Callers guarantee it came from
    /// [`Board::legal_moves`].
    pub(crate) fn make_move(&mut self, mv: Move) {
        let Some((moved, captured)) = self.relocate(mv) else {
            return;
        };
        let color = moved.color;

        self.en_passant_target =
            if moved.kind == PieceKind::Pawn && mv.from.rank().abs_diff(mv.to.rank()) == 2 {
                Some(Square(mv.from.file(), (mv.from.rank() + mv.to.rank()) / 2))
            } else {
                None
            };

        if moved.kind == PieceKind::King {
            self.castling_rights.remove_color(color);
        }
        for (corner, owner, kingside) in ROOK_CORNERS {
            if mv.from == corner || mv.to == corner {
                self.castling_rights.remove(owner, kingside);
            }
        }

        // Counters loaded from FEN may already sit at the limit
        if moved.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = color.opponent();
    }

    /// Move the pieces for `mv`: clear the origin, remove an en passant
    /// victim, bring the castling rook across, then place the (possibly
    /// promoted) piece on the destination. Returns the moved piece as it was
    /// before the move and whatever was captured.
    pub(crate) fn relocate(&mut self, mv: Move) -> Option<(Piece, Option<Piece>)> {
        let moved = self.take_piece(mv.from)?;

        let mut captured = None;
        match mv.kind {
            MoveKind::EnPassant => {
                captured = self.take_piece(Square(mv.to.file(), mv.from.rank()));
            }
            MoveKind::CastleKingside | MoveKind::CastleQueenside => {
                let rank = mv.from.rank();
                let (rook_from, rook_to) = if mv.kind == MoveKind::CastleKingside {
                    (Square(7, rank), Square(5, rank))
                } else {
                    (Square(0, rank), Square(3, rank))
                };
                if let Some(rook) = self.take_piece(rook_from) {
                    self.set_piece(rook_to, rook);
                }
            }
            MoveKind::Normal => {}
        }

        let placed = match mv.promotion {
            Some(kind)
                if moved.kind == PieceKind::Pawn
                    && mv.to.rank() == moved.color.pawn_promotion_rank() =>
            {
                Piece::new(kind, moved.color)
            }
            _ => moved,
        };
        if let Some(victim) = self.take_piece(mv.to) {
            captured = Some(victim);
        }
        self.set_piece(mv.to, placed);

        Some((moved, captured))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CastlingRights;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_double_push_sets_and_next_move_clears_target() {
        let mut board = Board::new();
        board.apply(Move::new(sq("e2"), sq("e4"))).unwrap();
        assert_eq!(board.en_passant_target(), Some(sq("e3")));
        assert_eq!(board.side_to_move(), Color::Black);

        board.apply(Move::new(sq("g8"), sq("f6"))).unwrap();
        assert_eq!(board.en_passant_target(), None);
    }

    #[test]
    fn test_illegal_move_leaves_board_unchanged() {
        let mut board = Board::new();
        let before = board.clone();
        let result = board.apply(Move::new(sq("e2"), sq("e5")));
        assert_eq!(
            result,
            Err(MoveError::IllegalMove {
                mv: Move::new(sq("e2"), sq("e5"))
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_turn_move_is_rejected() {
        let mut board = Board::new();
        let result = board.apply(Move::new(sq("e7"), sq("e5")));
        assert!(matches!(result, Err(MoveError::NotYourTurn { .. })));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_move_with_wrong_kind_is_illegal() {
        let mut board = Board::try_from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        let mislabelled = Move::new(sq("e1"), sq("g1"));
        assert!(board.apply(mislabelled).is_err());
        board
            .apply(Move::castle_kingside(sq("e1"), sq("g1")))
            .unwrap();
    }

    #[test]
    fn test_castling_moves_rook_and_drops_rights() {
        let mut board = Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 10").unwrap();
        board
            .apply(Move::castle_kingside(sq("e1"), sq("g1")))
            .unwrap();
        assert_eq!(board.piece_at(sq("g1")).map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(board.piece_at(sq("f1")).map(|p| p.kind), Some(PieceKind::Rook));
        assert_eq!(board.piece_at(sq("h1")), None);
        assert_eq!(board.piece_at(sq("e1")), None);
        assert!(!board.castling_rights().has(Color::White, true));
        assert!(!board.castling_rights().has(Color::White, false));
        assert!(board.castling_rights().has(Color::Black, true));
        assert_eq!(board.halfmove_clock(), 4);

        board
            .apply(Move::castle_queenside(sq("e8"), sq("c8")))
            .unwrap();
        assert_eq!(board.piece_at(sq("c8")).map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(board.piece_at(sq("d8")).map(|p| p.kind), Some(PieceKind::Rook));
        assert_eq!(board.piece_at(sq("a8")), None);
        assert_eq!(board.castling_rights(), CastlingRights::none());
        assert_eq!(board.fullmove_number(), 11);
    }

    #[test]
    fn test_rook_move_drops_one_right() {
        let mut board = Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        board.apply(Move::new(sq("a1"), sq("a2"))).unwrap();
        assert!(!board.castling_rights().has(Color::White, false));
        assert!(board.castling_rights().has(Color::White, true));
    }

    #[test]
    fn test_captured_rook_drops_its_right() {
        // White bishop takes the h8 rook
        let mut board =
            Board::try_from_fen("r3k2r/8/8/8/8/8/1B6/R3K2R w KQkq - 0 1").unwrap();
        board.apply(Move::new(sq("b2"), sq("h8"))).unwrap();
        assert!(!board.castling_rights().has(Color::Black, true));
        assert!(board.castling_rights().has(Color::Black, false));
        assert!(board.castling_rights().has(Color::White, true));
        assert_eq!(board.halfmove_clock(), 0);
    }

    #[test]
    fn test_en_passant_removes_pawn_beside_mover() {
        let mut board = Board::try_from_fen(
            "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
        )
        .unwrap();
        board.apply(Move::en_passant(sq("e5"), sq("d6"))).unwrap();
        assert_eq!(board.piece_at(sq("d5")), None);
        assert_eq!(board.piece_at(sq("e5")), None);
        assert_eq!(
            board.piece_at(sq("d6")),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(board.halfmove_clock(), 0);
    }

    #[test]
    fn test_promotion_places_chosen_piece() {
        let mut board = Board::try_from_fen("1r5k/P7/8/8/8/8/8/K7 w - - 5 40").unwrap();
        board
            .apply(Move::promotion(sq("a7"), sq("b8"), PieceKind::Knight))
            .unwrap();
        assert_eq!(
            board.piece_at(sq("b8")),
            Some(Piece::new(PieceKind::Knight, Color::White))
        );
        assert_eq!(board.piece_at(sq("a7")), None);
        assert_eq!(board.halfmove_clock(), 0);
    }

    #[test]
    fn test_promotion_without_piece_is_illegal() {
        let mut board = Board::try_from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").unwrap();
        assert!(board.apply(Move::new(sq("a7"), sq("a8"))).is_err());
    }

    #[test]
    fn test_counters_saturate_at_limit() {
        let mut board =
            Board::try_from_fen("4k3/8/8/8/8/8/8/4K1n1 b - - 4294967295 4294967295").unwrap();
        board.apply(Move::new(sq("g1"), sq("f3"))).unwrap();
        assert_eq!(board.halfmove_clock(), u32::MAX);
        assert_eq!(board.fullmove_number(), u32::MAX);
        assert!(board.to_fen().ends_with("4294967295 4294967295"));
    }

    #[test]
    fn test_out_of_turn_error_names_move_and_side() {
        let mut board = Board::new();
        let e7e5 = Move::new(sq("e7"), sq("e5"));
        assert!(!board.legal_moves(sq("e7")).contains(&e7e5));
        let err = board.apply(e7e5).unwrap_err();
        assert_eq!(
            err,
            MoveError::NotYourTurn {
                mv: e7e5,
                side_to_move: Color::White
            }
        );
        assert_eq!(err.mv(), e7e5);
    }

    #[test]
    fn test_counters() {
        let mut board = Board::new();
        board.apply(Move::new(sq("g1"), sq("f3"))).unwrap();
        assert_eq!(board.halfmove_clock(), 1);
        assert_eq!(board.fullmove_number(), 1);
        board.apply(Move::new(sq("g8"), sq("f6"))).unwrap();
        assert_eq!(board.halfmove_clock(), 2);
        assert_eq!(board.fullmove_number(), 2);
        board.apply(Move::new(sq("e2"), sq("e4"))).unwrap();
        assert_eq!(board.halfmove_clock(), 0);
    }
}
