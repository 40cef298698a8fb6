//! Turn control around an external analysis engine.
//!
//! The [`GameController`] owns the board, applies human moves on the calling
//! thread, and hands FEN snapshots to an [`AnalysisEngine`] on a background
//! thread. Only one engine query may be outstanding; it is bounded by a
//! timeout and its answer is applied back by the owner.

mod analysis;
mod controller;
mod error;

pub use analysis::AnalysisEngine;
pub use controller::{ControllerConfig, EngineReply, GameController, DEFAULT_QUERY_TIMEOUT};
pub use error::ControllerError;
