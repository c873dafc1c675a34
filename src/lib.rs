//! # Shashki
//!
//! Session layer for the [`shashki_engine`] Russian checkers rules engine:
//! settings persistence, a plain-text move log, and a [`Session`] that accepts
//! moves in algebraic notation.
//!
//! ```no_run
//! use shashki::{init_tracing, load_settings_or_default, settings_path, Session};
//!
//! init_tracing();
//! let config = load_settings_or_default(&settings_path());
//! let mut session = Session::start(&config)?;
//! session.play("c3", "d4")?;
//! # Ok::<(), shashki::SessionError>(())
//! ```

pub mod core;
pub mod game;

pub use crate::core::{
    init_tracing, load_settings, load_settings_or_default, save_settings, settings_path,
    SessionConfig, SessionError, SessionResult,
};
pub use crate::game::{open_log_file, Session, TextLog};

pub use shashki_engine as engine;
