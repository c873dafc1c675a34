//! Game module - running a game with a text move log
//!
//! - `history` - [`TextLog`], the plain-text move log
//! - `session` - [`Session`], notation-driven play over a [`shashki_engine::Game`]

pub mod history;
pub mod session;

pub use history::{open_log_file, TextLog};
pub use session::Session;
