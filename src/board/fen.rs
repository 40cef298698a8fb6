use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::movegen::KING_HOME_FILE;
use super::{Board, Color, Move, Piece, PieceKind, Square};

/// FEN of the standard starting position
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// The halfmove clock and fullmove number are optional and default to
    /// `0` and `1`. The position must hold exactly one king per color, every
    /// castling right needs its king and rook on their home squares, and an
    /// en passant target must sit on the rank a double push just skipped.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if !(4..=6).contains(&parts.len()) {
            return Err(FenError::WrongPartCount { found: parts.len() });
        }

        // Piece placement, eighth rank first
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }
        for (rank, rank_str) in ranks.iter().enumerate() {
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                } else {
                    let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::WrongFileCount {
                            rank,
                            files: file + 1,
                        });
                    }
                    board.set_piece(Square(file, rank), piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::WrongFileCount { rank, files: file });
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        if parts[2] != "-" {
            for c in parts[2].chars() {
                let (color, kingside) = match c {
                    'K' => (Color::White, true),
                    'Q' => (Color::White, false),
                    'k' => (Color::Black, true),
                    'q' => (Color::Black, false),
                    _ => return Err(FenError::InvalidCastling { char: c }),
                };
                if !board.castling_pieces_home(color, kingside) {
                    return Err(FenError::CastlingWithoutPieces { char: c });
                }
                board.castling_rights.set(color, kingside);
            }
        }

        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            let invalid = || FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            };
            let target = parts[3].parse::<Square>().map_err(|_| invalid())?;
            // The square a double push skipped: rank 6 with White to move, rank 3 with Black
            let skipped_rank = match board.side_to_move {
                Color::White => 2,
                Color::Black => 5,
            };
            if target.rank() != skipped_rank {
                return Err(invalid());
            }
            Some(target)
        };

        if let Some(halfmove) = parts.get(4) {
            board.halfmove_clock = parse_counter(halfmove)?;
        }
        if let Some(fullmove) = parts.get(5) {
            board.fullmove_number = parse_counter(fullmove)?;
        }

        board.validate()?;
        Ok(board)
    }

    fn castling_pieces_home(&self, color: Color, kingside: bool) -> bool {
        let rank = color.home_rank();
        let rook_file = if kingside { 7 } else { 0 };
        self.piece_at(Square(KING_HOME_FILE, rank)) == Some(Piece::new(PieceKind::King, color))
            && self.piece_at(Square(rook_file, rank)) == Some(Piece::new(PieceKind::Rook, color))
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in 0..8 {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some(piece) = self.piece_at(Square(file, rank)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in coordinate notation (e.g., "e2e4", "e7e8q").
    ///
    /// The move kind is worked out from the moving piece and the geometry: a
    /// king travelling two files castles, a pawn moving diagonally onto the
    /// empty en passant target captures en passant. The resolved move must be
    /// legal for the side to move.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Board;
    ///
    /// let board = Board::new();
    /// let mv = board.parse_coordinate_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_coordinate_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() < 4 || chars.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: text.to_string(),
        };
        let from: Square = chars[..2]
            .iter()
            .collect::<String>()
            .parse()
            .map_err(|_| invalid_square())?;
        let to: Square = chars[2..4]
            .iter()
            .collect::<String>()
            .parse()
            .map_err(|_| invalid_square())?;

        let promotion = match chars.get(4) {
            Some(&c) => match PieceKind::from_char(c) {
                Some(kind) if kind.is_promotion_target() => Some(kind),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
            None => None,
        };

        let illegal = || MoveParseError::IllegalMove {
            notation: text.to_string(),
        };
        let piece = self.piece_at(from).ok_or_else(|| MoveParseError::NoPiece {
            notation: text.to_string(),
        })?;
        if piece.color != self.side_to_move {
            return Err(illegal());
        }

        let mut mv = Move::new(from, to);
        match piece.kind {
            PieceKind::King if from.rank() == to.rank() && from.file().abs_diff(to.file()) == 2 => {
                mv = if to.file() > from.file() {
                    Move::castle_kingside(from, to)
                } else {
                    Move::castle_queenside(from, to)
                };
            }
            PieceKind::Pawn => {
                if from.file() != to.file()
                    && self.is_empty(to)
                    && self.en_passant_target == Some(to)
                {
                    mv = Move::en_passant(from, to);
                }
                if to.rank() == piece.color.pawn_promotion_rank() && promotion.is_none() {
                    return Err(MoveParseError::MissingPromotion {
                        notation: text.to_string(),
                    });
                }
            }
            _ => {}
        }
        if let Some(kind) = promotion {
            mv = mv.with_promotion(kind);
        }

        if self.legal_moves(from).contains(&mv) {
            Ok(mv)
        } else {
            Err(illegal())
        }
    }
}

fn parse_counter(text: &str) -> Result<u32, FenError> {
    text.parse().map_err(|_| FenError::InvalidCounter {
        found: text.to_string(),
    })
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
