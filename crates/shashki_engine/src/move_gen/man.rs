//! Man move generation
//!
//! ## Rules
//!
//! - Simple move: one step diagonally forward onto an empty square
//! - Capture: jump an adjacent opponent piece in any of the four diagonal
//!   directions, landing on the empty square directly behind it
//!
//! Backward captures are legal for men in Russian checkers; backward simple
//! moves are not.

use crate::board::Board;
use crate::constants::DIAGONALS;
use crate::types::{Move, Piece, Player, Square};

pub(super) fn generate_captures(board: &Board, from: Square, owner: Player, moves: &mut Vec<Move>) {
    for &(d_row, d_col) in &DIAGONALS {
        let jumped = from.offset(d_row, d_col);
        let landing = from.offset(2 * d_row, 2 * d_col);

        if board.peek(landing) != Some(Piece::Empty) {
            continue;
        }

        if board.peek(jumped).is_some_and(|piece| piece.is_opponent_of(owner)) {
            moves.push(Move::capture(from, landing));
        }
    }
}

pub(super) fn generate_simple_moves(
    board: &Board,
    from: Square,
    owner: Player,
    moves: &mut Vec<Move>,
) {
    let forward = owner.forward();

    for d_col in [-1, 1] {
        let to = from.offset(forward, d_col);
        if board.peek(to) == Some(Piece::Empty) {
            moves.push(Move::simple(from, to));
        }
    }
}
