//! En passant target lifecycle and captures.

use crate::board::{Board, Color, Move, MoveKind, Piece, PieceKind, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_double_push_target_and_adjacent_captures() {
    // Black pawns on d4 and f4 wait beside e2-e4
    let mut board = Board::try_from_fen("4k3/8/8/8/3p1p2/8/4P3/4K3 w - - 0 1").unwrap();
    board.apply(Move::new(sq("e2"), sq("e4"))).unwrap();
    assert_eq!(board.en_passant_target(), Some(sq("e3")));

    for capturer in ["d4", "f4"] {
        let moves = board.legal_moves(sq(capturer));
        assert!(
            moves.contains(&Move::en_passant(sq(capturer), sq("e3"))),
            "{capturer} should capture en passant"
        );
    }
}

#[test]
fn test_target_clears_after_any_other_move() {
    let mut board = Board::try_from_fen("4k3/8/8/8/3p1p2/8/4P3/4K3 w - - 0 1").unwrap();
    board.apply(Move::new(sq("e2"), sq("e4"))).unwrap();
    board.apply(Move::new(sq("e8"), sq("e7"))).unwrap();
    assert_eq!(board.en_passant_target(), None);

    board.apply(Move::new(sq("e1"), sq("e2"))).unwrap();
    assert!(!board
        .legal_moves(sq("d4"))
        .iter()
        .any(|m| m.kind == MoveKind::EnPassant));
}

#[test]
fn test_single_push_sets_no_target() {
    let mut board = Board::new();
    board.apply(Move::new(sq("e2"), sq("e3"))).unwrap();
    assert_eq!(board.en_passant_target(), None);
}

#[test]
fn test_black_double_push_target() {
    let mut board = Board::try_from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").unwrap();
    board.apply(Move::new(sq("d7"), sq("d5"))).unwrap();
    assert_eq!(board.en_passant_target(), Some(sq("d6")));

    board.apply(Move::en_passant(sq("e5"), sq("d6"))).unwrap();
    assert_eq!(board.piece_at(sq("d5")), None);
    assert_eq!(
        board.piece_at(sq("d6")),
        Some(Piece::new(PieceKind::Pawn, Color::White))
    );
    assert_eq!(board.pieces(Color::Black).count(), 1);
}

#[test]
fn test_non_adjacent_pawn_cannot_capture() {
    let mut board = Board::try_from_fen("4k3/8/8/8/2p5/8/4P3/4K3 w - - 0 1").unwrap();
    board.apply(Move::new(sq("e2"), sq("e4"))).unwrap();
    assert!(!board
        .legal_moves(sq("c4"))
        .iter()
        .any(|m| m.is_en_passant()));
}

#[test]
fn test_en_passant_that_resolves_check() {
    // The double-pushed pawn gives check; taking it en passant is the answer
    let mut board = Board::try_from_fen("8/8/8/4k3/4p3/8/3P4/4K3 w - - 0 1").unwrap();
    board.apply(Move::new(sq("d2"), sq("d4"))).unwrap();
    assert!(board.is_in_check(Color::Black));

    let capture = Move::en_passant(sq("e4"), sq("d3"));
    assert!(board.legal_moves(sq("e4")).contains(&capture));
    board.apply(capture).unwrap();
    assert!(!board.is_in_check(Color::Black));
    assert_eq!(board.piece_at(sq("d4")), None);
}
