//! Engine controller implementation.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{AnalysisEngine, ControllerError};
use crate::board::{Board, GameStatus, Move, MoveList, MoveParseError, PieceKind, Square};
use crate::sync::BusyFlag;
use crate::uci::SearchDirective;

/// How long an engine query may run before it is abandoned.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Runtime settings for a [`GameController`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControllerConfig {
    /// Upper bound on one engine round trip
    pub query_timeout: Duration,
    /// Sent with every query
    pub directive: SearchDirective,
    /// Piece used when move text reaches the last rank without naming one.
    /// `None` rejects such text.
    pub default_promotion: Option<PieceKind>,
}

impl ControllerConfig {
    #[must_use]
    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_directive(mut self, directive: SearchDirective) -> Self {
        self.directive = directive;
        self
    }

    #[must_use]
    pub fn with_default_promotion(mut self, kind: Option<PieceKind>) -> Self {
        self.default_promotion = kind;
        self
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        ControllerConfig {
            query_timeout: DEFAULT_QUERY_TIMEOUT,
            directive: SearchDirective::default(),
            default_promotion: Some(PieceKind::Queen),
        }
    }
}

/// Outcome of a completed engine query
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineReply {
    /// The engine's move was applied
    Moved { mv: Move, status: GameStatus },
    /// The engine had no move; the board is unchanged
    NoMove,
}

/// An engine query running on a background thread
struct PendingQuery {
    reply: Receiver<Option<String>>,
    worker: JoinHandle<()>,
    started: Instant,
    deadline: Instant,
}

/// Owns the board and serializes every change to it.
///
/// Human moves are applied synchronously. An engine turn is started with
/// [`request_engine_move`](Self::request_engine_move), which snapshots the
/// position as FEN and queries the engine on its own thread; the answer is
/// applied by [`poll_engine_move`](Self::poll_engine_move) or
/// [`wait_engine_move`](Self::wait_engine_move). While a query is
/// outstanding every mutating call fails with [`ControllerError::Busy`].
///
/// A query that times out is abandoned but its thread cannot be stopped. Until
/// that thread returns, new queries fail with [`ControllerError::EngineStalled`]
/// instead of queueing behind it on the engine lock.
pub struct GameController<E> {
    board: Mutex<Board>,
    engine: Arc<Mutex<E>>,
    busy: BusyFlag,
    pending: Mutex<Option<PendingQuery>>,
    stalled: Mutex<Option<JoinHandle<()>>>,
    config: ControllerConfig,
}

impl<E: AnalysisEngine + Send + 'static> GameController<E> {
    /// Create a controller at the initial position
    #[must_use]
    pub fn new(engine: E, config: ControllerConfig) -> Self {
        Self::with_board(Board::new(), engine, config)
    }

    #[must_use]
    pub fn with_board(board: Board, engine: E, config: ControllerConfig) -> Self {
        GameController {
            board: Mutex::new(board),
            engine: Arc::new(Mutex::new(engine)),
            busy: BusyFlag::new(),
            pending: Mutex::new(None),
            stalled: Mutex::new(None),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// A copy of the current position
    #[must_use]
    pub fn board(&self) -> Board {
        self.board.lock().clone()
    }

    #[must_use]
    pub fn fen(&self) -> String {
        self.board.lock().to_fen()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.board.lock().terminal_state()
    }

    /// Legal moves of the piece on `from`
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> MoveList {
        self.board.lock().legal_moves(from)
    }

    /// Check if an engine query is outstanding
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Check if an abandoned engine query is still running
    #[must_use]
    pub fn is_engine_stalled(&self) -> bool {
        self.stalled
            .lock()
            .as_ref()
            .is_some_and(|worker| !worker.is_finished())
    }

    /// Replace the position
    pub fn set_board(&self, board: Board) -> Result<(), ControllerError> {
        let mut current = self.board.lock();
        if self.busy.is_busy() {
            return Err(ControllerError::Busy);
        }
        *current = board;
        Ok(())
    }

    /// Reset the board to starting position
    pub fn new_game(&self) -> Result<(), ControllerError> {
        self.set_board(Board::new())
    }

    /// Apply a move for the side to move and classify the result
    pub fn play(&self, mv: Move) -> Result<GameStatus, ControllerError> {
        let mut board = self.board.lock();
        if self.busy.is_busy() {
            return Err(ControllerError::Busy);
        }
        board.apply(mv)?;
        Ok(board.terminal_state())
    }

    /// Like [`play`](Self::play) for coordinate text such as `e2e4`.
    pub fn play_text(&self, text: &str) -> Result<GameStatus, ControllerError> {
        let mut board = self.board.lock();
        if self.busy.is_busy() {
            return Err(ControllerError::Busy);
        }
        let mv = self.resolve_text(&board, text)?;
        board.apply(mv)?;
        Ok(board.terminal_state())
    }

    /// Snapshot the position and start an engine query for the side to move.
    pub fn request_engine_move(&self) -> Result<(), ControllerError> {
        let fen = {
            let board = self.board.lock();
            if !self.busy.try_acquire() {
                return Err(ControllerError::Busy);
            }
            let status = board.terminal_state();
            if status.is_over() {
                self.busy.release();
                return Err(ControllerError::GameOver(status));
            }
            let mut stalled = self.stalled.lock();
            if let Some(worker) = stalled.take() {
                if !worker.is_finished() {
                    *stalled = Some(worker);
                    self.busy.release();
                    return Err(ControllerError::EngineStalled);
                }
                let _ = worker.join();
                log_debug!("abandoned engine query finished");
            }
            board.to_fen()
        };

        let mut pending = self.pending.lock();
        let (tx, rx) = mpsc::channel();
        let engine = Arc::clone(&self.engine);
        let directive = self.config.directive;
        log_debug!("engine query: {fen} ({directive})");

        let spawned = thread::Builder::new()
            .name("engine-query".to_string())
            .spawn(move || {
                let reply = engine.lock().best_move(&fen, directive);
                // The controller may have given up on this query already
                let _ = tx.send(reply);
            });
        let worker = match spawned {
            Ok(worker) => worker,
            Err(e) => {
                self.busy.release();
                return Err(ControllerError::Spawn(e));
            }
        };

        let started = Instant::now();
        *pending = Some(PendingQuery {
            reply: rx,
            worker,
            started,
            deadline: started + self.config.query_timeout,
        });
        Ok(())
    }

    /// Apply the engine's answer if it has arrived.
    ///
    /// Returns `Ok(None)` while the query is still running within its
    /// timeout. Once resolved, by answer or by timeout, the controller is no
    /// longer busy.
    pub fn poll_engine_move(&self) -> Result<Option<EngineReply>, ControllerError> {
        let mut pending = self.pending.lock();
        let query = pending.take().ok_or(ControllerError::NotRequested)?;

        let received = match query.reply.try_recv() {
            Ok(reply) => Ok(reply),
            Err(TryRecvError::Empty) if Instant::now() < query.deadline => {
                *pending = Some(query);
                return Ok(None);
            }
            Err(TryRecvError::Empty) => Err(RecvTimeoutError::Timeout),
            Err(TryRecvError::Disconnected) => Err(RecvTimeoutError::Disconnected),
        };
        let outcome = self.settle(query, received);
        self.finish(outcome).map(Some)
    }

    /// Block until the engine answers or the query times out.
    pub fn wait_engine_move(&self) -> Result<EngineReply, ControllerError> {
        let query = self
            .pending
            .lock()
            .take()
            .ok_or(ControllerError::NotRequested)?;

        let remaining = query.deadline.saturating_duration_since(Instant::now());
        let received = query.reply.recv_timeout(remaining);
        let outcome = self.settle(query, received);
        self.finish(outcome)
    }

    /// Retire the query's worker thread. A worker that timed out is parked
    /// in `stalled` until it returns.
    fn settle(
        &self,
        query: PendingQuery,
        received: Result<Option<String>, RecvTimeoutError>,
    ) -> Result<Option<String>, ControllerError> {
        match received {
            Ok(reply) => {
                // Sending is the worker's last step
                let _ = query.worker.join();
                Ok(reply)
            }
            Err(RecvTimeoutError::Disconnected) => {
                if query.worker.join().is_err() {
                    log_warn!("engine query thread panicked");
                }
                Err(ControllerError::EngineDisconnected)
            }
            Err(RecvTimeoutError::Timeout) => {
                log_warn!(
                    "engine query abandoned after {} ms",
                    query.started.elapsed().as_millis()
                );
                *self.stalled.lock() = Some(query.worker);
                Err(ControllerError::Timeout {
                    after: self.config.query_timeout,
                })
            }
        }
    }

    /// Release the busy flag and apply whatever the engine said.
    fn finish(
        &self,
        outcome: Result<Option<String>, ControllerError>,
    ) -> Result<EngineReply, ControllerError> {
        let mut board = self.board.lock();
        self.busy.release();

        let Some(text) = outcome?.filter(|text| !text.trim().is_empty()) else {
            log_debug!("engine found no move");
            return Ok(EngineReply::NoMove);
        };
        let mv = self
            .resolve_text(&board, &text)
            .map_err(|error| ControllerError::InvalidEngineMove {
                text: text.clone(),
                error,
            })?;
        board.apply(mv)?;
        log_debug!("engine played {mv}");
        Ok(EngineReply::Moved {
            mv,
            status: board.terminal_state(),
        })
    }

    /// Parse coordinate text, filling in the default promotion piece when
    /// the text leaves it out.
    fn resolve_text(&self, board: &Board, text: &str) -> Result<Move, MoveParseError> {
        let text = text.trim();
        match (board.parse_coordinate_move(text), self.config.default_promotion) {
            (Err(MoveParseError::MissingPromotion { .. }), Some(kind)) => {
                board.parse_coordinate_move(&format!("{text}{}", kind.to_char()))
            }
            (result, _) => result,
        }
    }
}
