//! Castling availability: path, rights, check and attacked squares.

use crate::board::{Board, Move, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn can_castle_kingside(fen: &str) -> bool {
    let board = Board::try_from_fen(fen).unwrap();
    board
        .legal_moves(sq("e1"))
        .contains(&Move::castle_kingside(sq("e1"), sq("g1")))
}

#[test]
fn test_white_kingside_available_when_all_conditions_hold() {
    assert!(can_castle_kingside("4k3/8/8/8/8/8/8/4K2R w K - 0 1"));
}

#[test]
fn test_occupied_f1_or_g1_removes_castling() {
    assert!(!can_castle_kingside("4k3/8/8/8/8/8/8/4KB1R w K - 0 1"));
    assert!(!can_castle_kingside("4k3/8/8/8/8/8/8/4K1NR w K - 0 1"));
    // An enemy piece blocks just the same
    assert!(!can_castle_kingside("4k3/8/8/8/8/8/8/4K1nR w K - 0 1"));
}

#[test]
fn test_king_in_check_cannot_castle() {
    // Rook on e8 gives check along the e-file
    assert!(!can_castle_kingside("4r1k1/8/8/8/8/8/8/4K2R w K - 0 1"));
}

#[test]
fn test_attacked_transit_square_removes_castling() {
    // Rook on f8 covers f1
    assert!(!can_castle_kingside("5rk1/8/8/8/8/8/8/4K2R w K - 0 1"));
}

#[test]
fn test_attacked_destination_removes_castling() {
    // Rook on g8 covers g1
    assert!(!can_castle_kingside("k5r1/8/8/8/8/8/8/4K2R w K - 0 1"));
}

#[test]
fn test_pawn_attack_on_transit_square_counts() {
    // Black pawn on e2 attacks f1 even though f1 is empty
    assert!(!can_castle_kingside("4k3/8/8/8/8/8/4p3/4K2R w K - 0 1"));
}

#[test]
fn test_attacked_rook_does_not_prevent_castling() {
    // Rook on h8 attacks h1 only
    assert!(can_castle_kingside("k6r/8/8/8/8/8/8/4K2R w K - 0 1"));
}

#[test]
fn test_missing_right_removes_castling() {
    assert!(!can_castle_kingside("4k3/8/8/8/8/8/8/R3K2R w Q - 0 1"));
    assert!(!can_castle_kingside("4k3/8/8/8/8/8/8/4K2R w - - 0 1"));
}

#[test]
fn test_queenside_b1_may_be_attacked() {
    // Only the king's path matters: b1 attacked by the b8 rook is fine
    let board = Board::try_from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1").unwrap();
    assert!(board
        .legal_moves(sq("e1"))
        .contains(&Move::castle_queenside(sq("e1"), sq("c1"))));

    // but the b1 square must be empty
    let board = Board::try_from_fen("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1").unwrap();
    assert!(!board
        .legal_moves(sq("e1"))
        .iter()
        .any(|m| m.is_castling()));
}

#[test]
fn test_black_castling_through_check_blocked() {
    let board = Board::try_from_fen("r3k2r/8/8/8/8/8/8/3RK2R b kq - 0 1").unwrap();
    let moves = board.legal_moves(sq("e8"));
    // d8 is covered by the d1 rook
    assert!(!moves.contains(&Move::castle_queenside(sq("e8"), sq("c8"))));
    assert!(moves.contains(&Move::castle_kingside(sq("e8"), sq("g8"))));
}

#[test]
fn test_castling_blocked_by_check() {
    let board = Board::try_from_fen("r3k2r/8/8/8/4Q3/8/8/R3K2R b KQkq - 0 1").unwrap();
    assert!(!board.all_legal_moves().iter().any(|m| m.is_castling()));
}

#[test]
fn test_rights_lost_after_king_walk() {
    let mut board = Board::try_from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    board.apply(Move::new(sq("e1"), sq("f1"))).unwrap();
    board.apply(Move::new(sq("e8"), sq("d8"))).unwrap();
    board.apply(Move::new(sq("f1"), sq("e1"))).unwrap();
    board.apply(Move::new(sq("d8"), sq("e8"))).unwrap();
    assert!(!board.legal_moves(sq("e1")).iter().any(|m| m.is_castling()));
}
