//! King move generation
//!
//! Kings are "flying": they move any distance along a diagonal.
//!
//! ## Rules
//!
//! - Simple move: every empty square along a diagonal up to the first occupied
//!   square or the edge
//! - Capture: the first piece met along a diagonal (the blocker) must belong to
//!   the opponent; every empty square directly behind it, up to the next
//!   occupied square or the edge, is a landing square
//!
//! An own-piece blocker, or two pieces back to back, gives no capture in that
//! direction.

use crate::board::Board;
use crate::constants::DIAGONALS;
use crate::types::{Move, Piece, Player, Square};

pub(super) fn generate_captures(board: &Board, from: Square, owner: Player, moves: &mut Vec<Move>) {
    for &(d_row, d_col) in &DIAGONALS {
        let Some(blocker) = from
            .ray(d_row, d_col)
            .find(|sq| board.peek(*sq) != Some(Piece::Empty))
        else {
            continue;
        };

        if !board.peek(blocker).is_some_and(|piece| piece.is_opponent_of(owner)) {
            continue;
        }

        moves.extend(
            blocker
                .ray(d_row, d_col)
                .take_while(|sq| board.peek(*sq) == Some(Piece::Empty))
                .map(|landing| Move::capture(from, landing)),
        );
    }
}

pub(super) fn generate_simple_moves(board: &Board, from: Square, moves: &mut Vec<Move>) {
    for &(d_row, d_col) in &DIAGONALS {
        moves.extend(
            from.ray(d_row, d_col)
                .take_while(|sq| board.peek(*sq) == Some(Piece::Empty))
                .map(|to| Move::simple(from, to)),
        );
    }
}
