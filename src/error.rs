//! Error types for the engine and the referee transport

use thiserror::Error;

/// Errors raised while driving a match.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("could not reserve {requested} slots for {what}")]
    Resource { what: &'static str, requested: usize },

    #[error("worker {worker} disconnected mid-round")]
    WorkerDisconnected { worker: usize },

    #[error("every worker has exited")]
    PoolDisconnected,

    #[error("failed to spawn worker thread: {0}")]
    WorkerSpawn(#[source] std::io::Error),

    #[error("invalid colour assignment: {0:?}")]
    InvalidColour(String),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Failures of the referee connection. Any of these ends the match.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("referee closed the connection")]
    Closed,

    #[error("malformed referee message: {0:?}")]
    Malformed(String),
}

/// A move string that is neither `pass` nor two in-range digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed move string: {0:?}")]
pub struct MoveParseError(pub String);
