//! Move types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceKind;
use super::square::Square;

/// What a move does beyond relocating the moving piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Normal,
    EnPassant,
    CastleKingside,
    CastleQueenside,
}

/// A move from one square to another.
///
/// `promotion` is set only for pawn moves onto the last rank; a pawn move
/// onto the last rank without it is never legal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
    pub kind: MoveKind,
}

impl Move {
    /// Create a plain move (quiet or capture)
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            kind: MoveKind::Normal,
        }
    }

    /// Create a promotion move (quiet or capture)
    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square, piece: PieceKind) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
            kind: MoveKind::Normal,
        }
    }

    /// Create an en passant capture
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            kind: MoveKind::EnPassant,
        }
    }

    /// Create a kingside castle move (king's origin and destination)
    #[inline]
    #[must_use]
    pub const fn castle_kingside(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            kind: MoveKind::CastleKingside,
        }
    }

    /// Create a queenside castle move (king's origin and destination)
    #[inline]
    #[must_use]
    pub const fn castle_queenside(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            kind: MoveKind::CastleQueenside,
        }
    }

    /// Same move with the promotion piece replaced
    #[inline]
    #[must_use]
    pub const fn with_promotion(self, piece: PieceKind) -> Self {
        Move {
            promotion: Some(piece),
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(
            self.kind,
            MoveKind::CastleKingside | MoveKind::CastleQueenside
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        match self.kind {
            MoveKind::Normal => {}
            MoveKind::EnPassant => write!(f, " ep")?,
            MoveKind::CastleKingside => write!(f, " O-O")?,
            MoveKind::CastleQueenside => write!(f, " O-O-O")?,
        }
        write!(f, ")")
    }
}

/// Coordinate notation, as spoken over UCI (`e2e4`, `e7e8q`)
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Moves in generation order.
pub type MoveList = Vec<Move>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_coordinate_notation() {
        let e2: Square = "e2".parse().unwrap();
        let e4: Square = "e4".parse().unwrap();
        assert_eq!(Move::new(e2, e4).to_string(), "e2e4");

        let e7: Square = "e7".parse().unwrap();
        let e8: Square = "e8".parse().unwrap();
        assert_eq!(
            Move::promotion(e7, e8, PieceKind::Knight).to_string(),
            "e7e8n"
        );
    }

    #[test]
    fn test_debug_marks_special_moves() {
        let e1: Square = "e1".parse().unwrap();
        let g1: Square = "g1".parse().unwrap();
        assert_eq!(format!("{:?}", Move::castle_kingside(e1, g1)), "Move(e1g1 O-O)");
    }

    #[test]
    fn test_with_promotion_keeps_squares() {
        let a7: Square = "a7".parse().unwrap();
        let a8: Square = "a8".parse().unwrap();
        let mv = Move::new(a7, a8).with_promotion(PieceKind::Queen);
        assert!(mv.is_promotion());
        assert_eq!(mv.from, a7);
        assert_eq!(mv.kind, MoveKind::Normal);
    }
}
