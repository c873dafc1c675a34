//! # Shashki Engine
//!
//! Rules engine and turn state machine for Russian checkers on an 8x8 board:
//! mandatory capture, multi-jump chains, flying kings and promotion.
//!
//! The engine is synchronous and does no I/O. A presentation layer reads
//! player input, calls [`Game::legal_moves`] / [`Game::apply_move`], and
//! renders [`Game::board`]; a [`GameLog`] passed to the game receives the
//! move, capture and promotion events.
//!
//! ```
//! use shashki_engine::{Game, Move, Player, Square};
//!
//! let mut game = Game::new();
//! let from: Square = "a3".parse().unwrap();
//! let to: Square = "b4".parse().unwrap();
//!
//! let report = game.apply_move(Move::new(from, to)).unwrap();
//! assert!(!report.applied.is_capture);
//! assert_eq!(game.current_player(), Player::Black);
//! ```
//!
//! ## Module Organization
//!
//! - `types` - players, pieces, squares, moves, game status
//! - `board` - bounded 8x8 cell storage
//! - `move_gen` - move legality engine
//! - `api` - the [`Game`] state machine
//! - `sink` - the [`GameLog`] event interface
//! - `notation` - algebraic square names (`a3`, `h8`)

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod move_gen;
mod notation;
pub mod sink;
pub mod types;

pub use api::{Game, MoveReport};
pub use board::Board;
pub use error::{EngineError, EngineResult};
pub use move_gen::{
    all_legal_moves, can_player_capture, find_captures, find_simple_moves, has_any_legal_move,
    legal_moves,
};
pub use sink::{GameLog, LogEvent, NullLog};
pub use types::{GameStatus, Move, Piece, Player, Square};
