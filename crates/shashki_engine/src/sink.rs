//! Move log sink
//!
//! The state machine reports every applied leg, capture and promotion to a
//! [`GameLog`] passed in at construction. The engine never opens files; a
//! text-file implementation lives with the session layer.

use crate::types::{Move, Player, Square};

/// Receiver for the events of an applied move, in the order they happen:
/// the move itself, then the capture (if any), then the promotion (if any).
pub trait GameLog {
    fn record_move(&mut self, player: Player, mv: &Move);
    fn record_capture(&mut self, square: Square);
    fn record_promotion(&mut self, square: Square);
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NullLog;

impl GameLog for NullLog {
    fn record_move(&mut self, _player: Player, _mv: &Move) {}
    fn record_capture(&mut self, _square: Square) {}
    fn record_promotion(&mut self, _square: Square) {}
}

/// One recorded event, for sinks that keep events in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogEvent {
    Move { player: Player, mv: Move },
    Capture(Square),
    Promotion(Square),
}

impl GameLog for Vec<LogEvent> {
    fn record_move(&mut self, player: Player, mv: &Move) {
        self.push(LogEvent::Move { player, mv: *mv });
    }

    fn record_capture(&mut self, square: Square) {
        self.push(LogEvent::Capture(square));
    }

    fn record_promotion(&mut self, square: Square) {
        self.push(LogEvent::Promotion(square));
    }
}

impl<L: GameLog + ?Sized> GameLog for &mut L {
    fn record_move(&mut self, player: Player, mv: &Move) {
        (**self).record_move(player, mv);
    }

    fn record_capture(&mut self, square: Square) {
        (**self).record_capture(square);
    }

    fn record_promotion(&mut self, square: Square) {
        (**self).record_promotion(square);
    }
}
