//! Public game API
//!
//! ## Module Organization
//!
//! - `game` - the turn state machine ([`Game`]) and the per-move [`MoveReport`]

mod game;

pub use game::{Game, MoveReport};
