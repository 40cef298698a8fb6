//! Universal Chess Interface (UCI) text exchanged with an analysis engine.
//!
//! Builds the `position`/`go` requests, reads `bestmove` answers, and replays
//! `position ... moves ...` lists onto a [`Board`].

use std::fmt;
use std::io;

use crate::board::{Board, FenError, MoveParseError};

pub mod analyzer;
pub mod command;

pub use analyzer::UciAnalyzer;
pub use command::{
    parse_bestmove, parse_engine_line, position_command, EngineOutput, SearchDirective,
};

/// Error type for UCI position commands and engine sessions
#[derive(Debug)]
pub enum UciError {
    /// Invalid FEN string
    InvalidFen(FenError),
    /// Invalid move in the move list
    InvalidMove { move_str: String, error: MoveParseError },
    /// Missing required parts in the command
    MissingParts,
    /// The engine closed its output before answering
    EngineClosed,
    /// Reading from or writing to the engine failed
    Io(io::Error),
}

impl fmt::Display for UciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            UciError::InvalidMove { move_str, error } => {
                write!(f, "Invalid move '{move_str}': {error}")
            }
            UciError::MissingParts => write!(f, "Missing required parts in position command"),
            UciError::EngineClosed => write!(f, "Engine closed its output"),
            UciError::Io(e) => write!(f, "Engine I/O failed: {e}"),
        }
    }
}

impl std::error::Error for UciError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UciError::InvalidFen(e) => Some(e),
            UciError::InvalidMove { error, .. } => Some(error),
            UciError::Io(e) => Some(e),
            UciError::MissingParts | UciError::EngineClosed => None,
        }
    }
}

impl From<FenError> for UciError {
    fn from(e: FenError) -> Self {
        UciError::InvalidFen(e)
    }
}

impl From<io::Error> for UciError {
    fn from(e: io::Error) -> Self {
        UciError::Io(e)
    }
}

/// Parse a UCI position command, returning an error on failure.
///
/// Supports both "position startpos" and "position fen <fen>" formats,
/// optionally followed by "moves <move1> <move2> ...". The FEN may omit its
/// move counters. On error `board` holds the position reached so far.
pub fn try_parse_position_command(board: &mut Board, parts: &[&str]) -> Result<(), UciError> {
    let mut i = 1;

    match parts.get(i) {
        Some(&"startpos") => {
            *board = Board::new();
            i += 1;
        }
        Some(&"fen") => {
            let fen_end = parts[i + 1..]
                .iter()
                .position(|p| *p == "moves")
                .map_or(parts.len(), |offset| i + 1 + offset);
            if fen_end == i + 1 {
                return Err(UciError::MissingParts);
            }
            *board = Board::try_from_fen(&parts[i + 1..fen_end].join(" "))?;
            i = fen_end;
        }
        _ => return Err(UciError::MissingParts),
    }

    if parts.get(i) == Some(&"moves") {
        for &move_str in &parts[i + 1..] {
            let invalid = |error| UciError::InvalidMove {
                move_str: move_str.to_string(),
                error,
            };
            let mv = board.parse_coordinate_move(move_str).map_err(invalid)?;
            board.apply(mv).map_err(|_| {
                invalid(MoveParseError::IllegalMove {
                    notation: move_str.to_string(),
                })
            })?;
        }
    }

    Ok(())
}

/// Parse a UCI position command, logging errors instead of returning them.
///
/// Convenience wrapper around [`try_parse_position_command`] for callers that
/// only report failures.
pub fn parse_position_command(board: &mut Board, parts: &[&str]) {
    if let Err(e) = try_parse_position_command(board, parts) {
        log_warn!("position command rejected: {e}");
    }
}
