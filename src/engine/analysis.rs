//! The collaborator that picks moves for the engine side.

use crate::uci::SearchDirective;

/// Anything that can suggest a move for a position.
///
/// Implementations receive a FEN snapshot and answer with a move in
/// coordinate notation (`e2e4`, `e7e8q`), or `None` when they have no move.
/// They may block; the controller calls them off the owning thread.
pub trait AnalysisEngine {
    fn best_move(&mut self, fen: &str, directive: SearchDirective) -> Option<String>;
}

impl<F> AnalysisEngine for F
where
    F: FnMut(&str, SearchDirective) -> Option<String>,
{
    fn best_move(&mut self, fen: &str, directive: SearchDirective) -> Option<String> {
        self(fen, directive)
    }
}
