//! An analysis engine reached over an already-connected UCI line stream.

use std::io::{BufRead, Write};

use super::command::{
    parse_engine_line, position_command, EngineOutput, SearchDirective, IS_READY, UCI,
};
use super::UciError;
use crate::engine::AnalysisEngine;

/// Speaks UCI over a reader of engine output and a writer of engine input,
/// such as the pipes of a child process.
pub struct UciAnalyzer<R, W> {
    reader: R,
    writer: W,
    initialized: bool,
}

impl<R: BufRead, W: Write> UciAnalyzer<R, W> {
    #[must_use]
    pub fn new(reader: R, writer: W) -> Self {
        UciAnalyzer {
            reader,
            writer,
            initialized: false,
        }
    }

    /// Run `uci`/`uciok` then `isready`/`readyok`. Done lazily by the first
    /// query if not called explicitly.
    pub fn handshake(&mut self) -> Result<(), UciError> {
        self.send(UCI)?;
        self.read_until(|out| matches!(out, EngineOutput::UciOk))?;
        self.sync()?;
        self.initialized = true;
        Ok(())
    }

    /// Wait until the engine has processed everything sent so far.
    pub fn sync(&mut self) -> Result<(), UciError> {
        self.send(IS_READY)?;
        self.read_until(|out| matches!(out, EngineOutput::ReadyOk))?;
        Ok(())
    }

    /// Ask for the best move in `fen`. `Ok(None)` means the engine answered
    /// without a move.
    pub fn query(
        &mut self,
        fen: &str,
        directive: SearchDirective,
    ) -> Result<Option<String>, UciError> {
        if !self.initialized {
            self.handshake()?;
        }
        self.send(&position_command(fen))?;
        self.send(&directive.go_command())?;
        match self.read_until(|out| matches!(out, EngineOutput::BestMove(_)))? {
            EngineOutput::BestMove(mv) => Ok(mv),
            _ => Ok(None),
        }
    }

    /// Give back the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn send(&mut self, line: &str) -> Result<(), UciError> {
        log_debug!("engine <- {line}");
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn read_until(
        &mut self,
        wanted: impl Fn(&EngineOutput) -> bool,
    ) -> Result<EngineOutput, UciError> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(UciError::EngineClosed);
            }
            if let Some(out) = parse_engine_line(&line) {
                if wanted(&out) {
                    return Ok(out);
                }
                if let EngineOutput::Unknown(text) = &out {
                    log_debug!("engine -> unrecognised line '{text}'");
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> AnalysisEngine for UciAnalyzer<R, W> {
    fn best_move(&mut self, fen: &str, directive: SearchDirective) -> Option<String> {
        match self.query(fen, directive) {
            Ok(mv) => mv,
            Err(e) => {
                log_warn!("engine query failed: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn analyzer(script: &str) -> UciAnalyzer<Cursor<Vec<u8>>, Vec<u8>> {
        UciAnalyzer::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn sent(analyzer: UciAnalyzer<Cursor<Vec<u8>>, Vec<u8>>) -> Vec<String> {
        let (_, writer) = analyzer.into_inner();
        String::from_utf8(writer)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_query_runs_handshake_first() {
        let mut engine = analyzer(
            "id name Scripted\nuciok\nreadyok\ninfo depth 1 pv e2e4\nbestmove e2e4 ponder e7e5\n",
        );
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        let mv = engine.query(fen, SearchDirective::default()).unwrap();
        assert_eq!(mv, Some("e2e4".to_string()));
        assert_eq!(
            sent(engine),
            vec![
                "uci".to_string(),
                "isready".to_string(),
                format!("position fen {fen}"),
                "go depth 12".to_string(),
            ]
        );
    }

    #[test]
    fn test_second_query_skips_handshake() {
        let mut engine = analyzer("uciok\nreadyok\nbestmove e7e5\nbestmove (none)\n");
        engine.handshake().unwrap();
        assert_eq!(
            engine.best_move("fen one", SearchDirective::MoveTime(100)),
            Some("e7e5".to_string())
        );
        assert_eq!(engine.best_move("fen two", SearchDirective::MoveTime(100)), None);
        let lines = sent(engine);
        assert_eq!(lines.iter().filter(|l| *l == "uci").count(), 1);
        assert_eq!(lines.last().map(String::as_str), Some("go movetime 100"));
    }

    #[test]
    fn test_closed_stream_is_an_error() {
        let mut engine = analyzer("uciok\n");
        assert!(matches!(
            engine.query("fen", SearchDirective::default()),
            Err(UciError::EngineClosed)
        ));
        assert_eq!(engine.best_move("fen", SearchDirective::default()), None);
    }
}
