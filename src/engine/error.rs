use std::fmt;
use std::io;
use std::time::Duration;

use crate::board::{GameStatus, MoveError, MoveParseError};

/// Error type for [`GameController`](super::GameController) operations
#[derive(Debug)]
pub enum ControllerError {
    /// An engine query is outstanding
    Busy,
    /// No engine query was requested
    NotRequested,
    /// The side to move has no legal moves
    GameOver(GameStatus),
    /// The engine did not answer in time
    Timeout { after: Duration },
    /// The engine thread ended without answering
    EngineDisconnected,
    /// A timed-out query still holds the engine
    EngineStalled,
    /// The engine answered with text that is not a legal move
    InvalidEngineMove { text: String, error: MoveParseError },
    /// Move text from the caller could not be resolved
    Parse(MoveParseError),
    /// The move is not legal for the side to move
    Move(MoveError),
    /// The query thread could not be started
    Spawn(io::Error),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::Busy => write!(f, "An engine query is already in progress"),
            ControllerError::NotRequested => write!(f, "No engine query is in progress"),
            ControllerError::GameOver(status) => write!(f, "Game is over: {status}"),
            ControllerError::Timeout { after } => {
                write!(f, "Engine did not answer within {} ms", after.as_millis())
            }
            ControllerError::EngineDisconnected => write!(f, "Engine stopped without answering"),
            ControllerError::EngineStalled => {
                write!(f, "Engine is still busy with an abandoned query")
            }
            ControllerError::InvalidEngineMove { text, error } => {
                write!(f, "Engine answered '{text}': {error}")
            }
            ControllerError::Parse(e) => write!(f, "{e}"),
            ControllerError::Move(e) => write!(f, "{e}"),
            ControllerError::Spawn(e) => write!(f, "Could not start engine query: {e}"),
        }
    }
}

impl std::error::Error for ControllerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ControllerError::InvalidEngineMove { error, .. } => Some(error),
            ControllerError::Parse(e) => Some(e),
            ControllerError::Move(e) => Some(e),
            ControllerError::Spawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveError> for ControllerError {
    fn from(e: MoveError) -> Self {
        ControllerError::Move(e)
    }
}

impl From<MoveParseError> for ControllerError {
    fn from(e: MoveParseError) -> Self {
        ControllerError::Parse(e)
    }
}
