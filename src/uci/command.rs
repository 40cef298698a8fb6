//! Command text sent to an analysis engine and the lines it answers with.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opens the session; the engine answers [`UCI_OK`].
pub const UCI: &str = "uci";
pub const UCI_OK: &str = "uciok";
/// Synchronisation ping; the engine answers [`READY_OK`].
pub const IS_READY: &str = "isready";
pub const READY_OK: &str = "readyok";

/// Search depth used when nothing else is configured.
pub const DEFAULT_DEPTH: u32 = 12;

/// How long the engine should think about a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchDirective {
    /// Search to a fixed number of plies.
    Depth(u32),
    /// Search for a fixed number of milliseconds.
    MoveTime(u64),
}

impl SearchDirective {
    /// The `go ...` line for this directive.
    #[must_use]
    pub fn go_command(&self) -> String {
        self.to_string()
    }
}

impl Default for SearchDirective {
    fn default() -> Self {
        SearchDirective::Depth(DEFAULT_DEPTH)
    }
}

impl fmt::Display for SearchDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchDirective::Depth(depth) => write!(f, "go depth {depth}"),
            SearchDirective::MoveTime(ms) => write!(f, "go movetime {ms}"),
        }
    }
}

/// `position fen <fen>` for the given snapshot.
#[must_use]
pub fn position_command(fen: &str) -> String {
    format!("position fen {}", fen.trim())
}

/// One line of engine output, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineOutput {
    UciOk,
    ReadyOk,
    /// `bestmove <move> [ponder <move>]`; `None` when the engine found nothing.
    BestMove(Option<String>),
    /// `id`, `info` and `option` lines.
    Info(String),
    Unknown(String),
}

pub fn parse_engine_line(line: &str) -> Option<EngineOutput> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let output = match parts[0] {
        UCI_OK => EngineOutput::UciOk,
        READY_OK => EngineOutput::ReadyOk,
        "bestmove" => {
            let mv = parts
                .get(1)
                .filter(|token| !matches!(**token, "(none)" | "0000"))
                .map(|token| (*token).to_string());
            EngineOutput::BestMove(mv)
        }
        "id" | "info" | "option" => EngineOutput::Info(trimmed.to_string()),
        _ => EngineOutput::Unknown(trimmed.to_string()),
    };

    Some(output)
}

/// Extract the move from the first `bestmove` line of `output`.
#[must_use]
pub fn parse_bestmove(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| match parse_engine_line(line) {
            Some(EngineOutput::BestMove(mv)) => Some(mv),
            _ => None,
        })
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_command() {
        assert_eq!(SearchDirective::default().go_command(), "go depth 12");
        assert_eq!(SearchDirective::MoveTime(250).go_command(), "go movetime 250");
    }

    #[test]
    fn test_position_command() {
        assert_eq!(
            position_command("8/8/8/8/8/8/8/K6k w - - 0 1\n"),
            "position fen 8/8/8/8/8/8/8/K6k w - - 0 1"
        );
    }

    #[test]
    fn test_parse_engine_lines() {
        assert_eq!(parse_engine_line("uciok"), Some(EngineOutput::UciOk));
        assert_eq!(parse_engine_line("  readyok \r\n"), Some(EngineOutput::ReadyOk));
        assert_eq!(parse_engine_line(""), None);
        assert!(matches!(
            parse_engine_line("info depth 3 score cp 20"),
            Some(EngineOutput::Info(_))
        ));
        assert_eq!(
            parse_engine_line("bestmove e7e8q ponder a2a3"),
            Some(EngineOutput::BestMove(Some("e7e8q".to_string())))
        );
    }

    #[test]
    fn test_parse_bestmove() {
        let output = "info depth 12 score cp 31 pv e2e4 e7e5\nbestmove e2e4 ponder e7e5\n";
        assert_eq!(parse_bestmove(output), Some("e2e4".to_string()));
        assert_eq!(parse_bestmove("bestmove (none)"), None);
        assert_eq!(parse_bestmove("bestmove 0000"), None);
        assert_eq!(parse_bestmove("bestmove"), None);
        assert_eq!(parse_bestmove("info string nothing"), None);
    }
}
