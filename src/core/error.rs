//! Error types for the session layer
//!
//! Wraps move-log I/O, settings (de)serialisation and engine errors so the
//! caller driving a game handles a single error type.

use shashki_engine::{EngineError, Player};
use thiserror::Error;

/// Errors that can occur while running a session
#[derive(Error, Debug)]
pub enum SessionError {
    /// Move log or settings file I/O error
    #[error("Session I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    Settings(#[from] serde_json::Error),

    /// Rejected by the rules engine (bad notation, illegal move, off-board square)
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A move was submitted after the game ended
    #[error("Game is over: {winner} won")]
    GameOver { winner: Player },
}

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;
