//! Game session
//!
//! A [`Session`] is what a presentation layer drives: it owns a [`Game`]
//! logging to a [`TextLog`], accepts squares in algebraic notation, and
//! refuses moves once the game has ended.

use crate::core::{SessionConfig, SessionError, SessionResult};
use crate::game::history::{open_log_file, TextLog};
use shashki_engine::{Game, Move, MoveReport, Square};
use std::fs::File;
use std::io::Write;
use tracing::info;

pub struct Session<W: Write = File> {
    game: Game<TextLog<W>>,
}

impl Session<File> {
    /// Open the configured move log and start a game from the opening position
    pub fn start(config: &SessionConfig) -> SessionResult<Self> {
        let log = open_log_file(config)?;
        info!("[SESSION] New game started");
        Ok(Session {
            game: Game::with_log(log),
        })
    }
}

impl<W: Write> Session<W> {
    /// Start a game logging to an arbitrary writer
    pub fn with_writer(writer: W) -> Self {
        Session {
            game: Game::with_log(TextLog::new(writer)),
        }
    }

    /// Resume from an existing game
    pub fn from_game(game: Game<TextLog<W>>) -> Self {
        Session { game }
    }

    pub fn game(&self) -> &Game<TextLog<W>> {
        &self.game
    }

    pub fn into_game(self) -> Game<TextLog<W>> {
        self.game
    }

    /// Legal moves of the piece on `square` (e.g. `"c3"`) for the side to move
    pub fn select(&self, square: &str) -> SessionResult<Vec<Move>> {
        let square: Square = square.parse()?;
        Ok(self.game.legal_moves(square)?)
    }

    /// Play `from` -> `to`, both in algebraic notation
    ///
    /// # Errors
    ///
    /// - [`SessionError::GameOver`] once a winner is decided
    /// - [`SessionError::Engine`] for unparsable squares or illegal moves;
    ///   the game is unchanged and the player may retry
    pub fn play(&mut self, from: &str, to: &str) -> SessionResult<MoveReport> {
        if let Some(winner) = self.game.winner() {
            return Err(SessionError::GameOver { winner });
        }

        let from: Square = from.parse()?;
        let to: Square = to.parse()?;
        Ok(self.game.apply_move(Move::new(from, to))?)
    }
}
