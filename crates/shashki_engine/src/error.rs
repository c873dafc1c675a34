//! Error types for the rules engine
//!
//! Coordinates outside the board are programming or input errors and are
//! propagated to the caller. A rejected move is an ordinary outcome: the
//! game state is left untouched so the caller can re-prompt.

use thiserror::Error;

use crate::types::Square;

/// Errors that can occur in the rules engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Coordinate outside the 8x8 board
    #[error("Coordinates out of bounds: ({row}, {col}) (must be 0-7)")]
    OutOfBounds { row: i8, col: i8 },

    /// Requested move is not in the legal-move set for the current player
    #[error("Illegal move: {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    /// Algebraic coordinate could not be parsed
    #[error("Invalid square notation: {input:?} (expected a file a-h followed by a rank 1-8)")]
    InvalidNotation { input: String },

    /// Board diagram is malformed
    #[error("Invalid board diagram: {message}")]
    InvalidDiagram { message: String },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
