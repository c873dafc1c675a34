//! Move legality engine
//!
//! Computes the legal single-leg moves for a piece, applying the mandatory
//! capture rule at the player level: if any piece of the moving side can
//! capture anywhere on the board, only captures are legal for every piece.
//!
//! ## Algorithm
//!
//! 1. [`find_captures`]: jumps available to one piece (men jump an adjacent
//!    opponent; kings jump the first piece on a diagonal and may land on any
//!    open square behind it)
//! 2. [`find_simple_moves`]: non-capturing steps (men one step forward; kings
//!    any distance along open diagonals)
//! 3. [`can_player_capture`]: step 1 applied to every piece of a side
//! 4. [`legal_moves`]: dispatch between 1 and 2 based on 3
//!
//! Every query rescans the whole board for the mandatory-capture check. At
//! 64 cells this is cheap enough that no caching is done.
//!
//! Moves come out in direction-scan order (see [`DIAGONALS`](crate::constants::DIAGONALS)),
//! so results are reproducible.

mod king;
mod man;

#[cfg(test)]
mod tests;

use crate::board::Board;
use crate::error::EngineResult;
use crate::types::{Move, Piece, Player, Square};

/// Legal moves for the piece on `square` when `player` is to move.
///
/// Empty if the cell is empty or holds an opponent piece. Fails only if
/// `square` is off the board.
pub fn legal_moves(board: &Board, player: Player, square: Square) -> EngineResult<Vec<Move>> {
    let piece = board.piece_at(square)?;
    let mut moves = Vec::new();

    if !piece.belongs_to(player) {
        return Ok(moves);
    }

    if can_player_capture(board, player) {
        find_captures(board, square, &mut moves);
    } else {
        find_simple_moves(board, square, &mut moves);
    }

    Ok(moves)
}

/// Legal moves for every piece of `player`, square by square in row-major order
pub fn all_legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let must_capture = can_player_capture(board, player);
    let mut moves = Vec::new();

    for square in board.squares_of(player) {
        if must_capture {
            find_captures(board, square, &mut moves);
        } else {
            find_simple_moves(board, square, &mut moves);
        }
    }

    moves
}

/// Append the captures available to the piece on `from`
///
/// Nothing is appended for an empty or off-board square.
pub fn find_captures(board: &Board, from: Square, moves: &mut Vec<Move>) {
    match board.peek(from) {
        Some(Piece::Man(owner)) => man::generate_captures(board, from, owner, moves),
        Some(Piece::King(owner)) => king::generate_captures(board, from, owner, moves),
        Some(Piece::Empty) | None => {}
    }
}

/// Append the non-capturing moves available to the piece on `from`
pub fn find_simple_moves(board: &Board, from: Square, moves: &mut Vec<Move>) {
    match board.peek(from) {
        Some(Piece::Man(owner)) => man::generate_simple_moves(board, from, owner, moves),
        Some(Piece::King(_)) => king::generate_simple_moves(board, from, moves),
        Some(Piece::Empty) | None => {}
    }
}

/// True if the piece on `from` has at least one capture
pub fn can_capture_from(board: &Board, from: Square) -> bool {
    let mut captures = Vec::new();
    find_captures(board, from, &mut captures);
    !captures.is_empty()
}

/// True if any piece of `player` has a capture available
pub fn can_player_capture(board: &Board, player: Player) -> bool {
    board
        .squares_of(player)
        .any(|square| can_capture_from(board, square))
}

/// True if `player` has at least one legal move anywhere on the board
pub fn has_any_legal_move(board: &Board, player: Player) -> bool {
    // Any capture is itself a legal move, so only simple moves need a second scan.
    if can_player_capture(board, player) {
        return true;
    }

    let mut moves = Vec::new();
    board.squares_of(player).any(|square| {
        find_simple_moves(board, square, &mut moves);
        !moves.is_empty()
    })
}
