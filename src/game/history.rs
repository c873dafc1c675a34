//! Text move log
//!
//! [`TextLog`] is the [`GameLog`] used by sessions. It writes one plain line
//! per event, flushing after each so a crash never loses the tail of a game:
//!
//! ```text
//! W: a3 -> b4
//!    Captured piece at c5
//!    Promoted to King at a1
//! ```
//!
//! Write failures are reported through `tracing` and otherwise ignored; a
//! full disk must not interrupt play.

use crate::core::{SessionConfig, SessionResult};
use shashki_engine::{GameLog, Move, Player, Square};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use tracing::{error, info};

/// Plain-text move log over any writer
#[derive(Debug)]
pub struct TextLog<W: Write> {
    writer: W,
}

impl<W: Write> TextLog<W> {
    pub fn new(writer: W) -> Self {
        TextLog { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, line: fmt::Arguments<'_>) {
        let result = self
            .writer
            .write_fmt(line)
            .and_then(|_| self.writer.write_all(b"\n"))
            .and_then(|_| self.writer.flush());

        if let Err(e) = result {
            error!("[LOG] Failed to write move log: {}", e);
        }
    }
}

impl<W: Write> GameLog for TextLog<W> {
    fn record_move(&mut self, player: Player, mv: &Move) {
        self.write_line(format_args!("{}: {} -> {}", player.letter(), mv.from, mv.to));
    }

    fn record_capture(&mut self, square: Square) {
        self.write_line(format_args!("   Captured piece at {}", square));
    }

    fn record_promotion(&mut self, square: Square) {
        self.write_line(format_args!("   Promoted to King at {}", square));
    }
}

/// Open the move log named in `config`, creating it if needed
///
/// The file is appended to or truncated depending on [`SessionConfig::append`].
pub fn open_log_file(config: &SessionConfig) -> SessionResult<TextLog<File>> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(config.append)
        .truncate(!config.append)
        .open(&config.log_path)?;

    info!("[LOG] Writing moves to {:?}", config.log_path);
    Ok(TextLog::new(file))
}
