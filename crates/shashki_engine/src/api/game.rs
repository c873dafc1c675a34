//! Turn state machine
//!
//! [`Game`] owns the board, the side to move and the game status. The only
//! way to change it is [`Game::apply_move`], which runs one leg of play:
//!
//! 1. Re-derive the authoritative move from the legal-move list of the source
//!    square (the caller's capture flag is ignored)
//! 2. Relocate the piece
//! 3. Remove the jumped piece, if the move was a capture
//! 4. Crown a man that reached its far row
//! 5. Keep the turn if the same piece can capture again
//! 6. Otherwise pass the turn and evaluate the terminal conditions for the
//!    side now to move
//!
//! # Multi-capture continuation
//!
//! When a capture leaves the moved piece with another capture, the turn does
//! not pass. Rules require the chain to continue with that same piece, but the
//! engine does not enforce it: any cell may be queried and moved, subject only
//! to the player-level mandatory capture rule. Callers that want strict chains
//! must restrict input to [`MoveReport::applied`]`.to` themselves.
//!
//! # Terminal state
//!
//! Once [`Game::is_game_over`] is true, callers must stop submitting moves.
//! The engine does not hard-reject them.

use tracing::{debug, info};

use crate::board::Board;
use crate::error::{EngineError, EngineResult};
use crate::move_gen::{can_capture_from, has_any_legal_move, legal_moves};
use crate::sink::{GameLog, NullLog};
use crate::types::{GameStatus, Move, Piece, Player, Square};

/// What happened when a move was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveReport {
    /// Side that made the move
    pub player: Player,
    /// The move as the engine applied it, with the authoritative capture flag
    pub applied: Move,
    /// Square of the removed opponent piece
    pub captured: Option<Square>,
    /// True if a man was crowned on this move
    pub promoted: bool,
    /// True if the same side must move again to continue a capture chain
    pub turn_continues: bool,
    /// Status after the move
    pub status: GameStatus,
}

/// A checkers game in progress
#[derive(Debug, Clone)]
pub struct Game<L = NullLog> {
    board: Board,
    current_player: Player,
    status: GameStatus,
    log: L,
}

impl Game<NullLog> {
    /// New game from the standard opening, without a move log
    pub fn new() -> Self {
        Self::with_log(NullLog)
    }
}

impl Default for Game<NullLog> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: GameLog> Game<L> {
    /// New game from the standard opening, White to move
    pub fn with_log(log: L) -> Self {
        Game {
            board: Board::initial(),
            current_player: Player::White,
            status: GameStatus::InProgress,
            log,
        }
    }

    /// Start from an arbitrary position.
    ///
    /// The status is evaluated immediately, so a position where `to_move`
    /// has no pieces or no legal move starts out finished.
    pub fn from_position(board: Board, to_move: Player, log: L) -> Self {
        let mut game = Game {
            board,
            current_player: to_move,
            status: GameStatus::InProgress,
            log,
        };
        game.status = game.evaluate_status();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    /// Winner, once the game is over
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut L {
        &mut self.log
    }

    pub fn into_log(self) -> L {
        self.log
    }

    /// Legal moves for the piece on `square`, for the side to move
    pub fn legal_moves(&self, square: Square) -> EngineResult<Vec<Move>> {
        legal_moves(&self.board, self.current_player, square)
    }

    /// Apply one leg of play for the side to move.
    ///
    /// # Errors
    ///
    /// - [`EngineError::OutOfBounds`] if either square is off the board
    /// - [`EngineError::IllegalMove`] if `requested.to` is not a legal
    ///   destination for the piece on `requested.from`
    ///
    /// On error the game is unchanged.
    pub fn apply_move(&mut self, requested: Move) -> EngineResult<MoveReport> {
        let candidates = self.legal_moves(requested.from)?;
        if !requested.to.is_on_board() {
            return Err(EngineError::OutOfBounds {
                row: requested.to.row,
                col: requested.to.col,
            });
        }

        let Some(mv) = candidates.into_iter().find(|mv| mv.to == requested.to) else {
            debug!(
                "[GAME] Rejected {:?} move {} (not in legal set)",
                self.current_player, requested
            );
            return Err(EngineError::IllegalMove {
                from: requested.from,
                to: requested.to,
            });
        };

        let player = self.current_player;
        let piece = self.board.piece_at(mv.from)?;

        self.board.relocate(&mv)?;
        self.log.record_move(player, &mv);
        debug!("[GAME] {:?}: {}", player, mv);

        let captured = if mv.is_capture {
            self.remove_captured(&mv)?
        } else {
            None
        };

        let promoted = self.crown_if_due(piece, mv.to)?;

        let turn_continues = mv.is_capture && can_capture_from(&self.board, mv.to);
        if turn_continues {
            debug!("[GAME] {:?} continues capturing from {}", player, mv.to);
        } else {
            self.current_player = player.opponent();
            self.status = self.evaluate_status();
            if let GameStatus::Won(winner) = self.status {
                info!("[GAME] ========== GAME OVER ==========");
                info!(
                    "[GAME] {} wins (White: {} pieces, Black: {} pieces)",
                    winner,
                    self.board.count(Player::White),
                    self.board.count(Player::Black)
                );
            }
        }

        Ok(MoveReport {
            player,
            applied: mv,
            captured,
            promoted,
            turn_continues,
            status: self.status,
        })
    }

    /// Clear the first piece between `mv.from` and `mv.to`
    fn remove_captured(&mut self, mv: &Move) -> EngineResult<Option<Square>> {
        let (d_row, d_col) = mv.direction();
        let victim = mv
            .from
            .ray(d_row, d_col)
            .take_while(|sq| *sq != mv.to)
            .find(|sq| self.board.peek(*sq).is_some_and(|piece| !piece.is_empty()));

        if let Some(square) = victim {
            self.board.set_piece_at(square, Piece::Empty)?;
            self.log.record_capture(square);
            debug!("[GAME] Captured piece at {}", square);
        }
        Ok(victim)
    }

    fn crown_if_due(&mut self, piece: Piece, landing: Square) -> EngineResult<bool> {
        let Piece::Man(owner) = piece else {
            return Ok(false);
        };
        if landing.row != owner.promotion_row() {
            return Ok(false);
        }

        self.board.set_piece_at(landing, piece.crowned())?;
        self.log.record_promotion(landing);
        info!("[GAME] {:?} man promoted to king at {}", owner, landing);
        Ok(true)
    }

    /// Terminal check for the side to move
    fn evaluate_status(&self) -> GameStatus {
        if self.board.count(Player::White) == 0 {
            GameStatus::Won(Player::Black)
        } else if self.board.count(Player::Black) == 0 {
            GameStatus::Won(Player::White)
        } else if !has_any_legal_move(&self.board, self.current_player) {
            GameStatus::Won(self.current_player.opponent())
        } else {
            GameStatus::InProgress
        }
    }
}
