//! Move legality tests
//!
//! Positions are written as board diagrams (row 0 / rank 8 first) so each test
//! reads like the position it checks.
//!
//! # Test Organization
//!
//! - `test_man_*` - man steps and jumps
//! - `test_king_*` - flying king slides and captures
//! - `test_mandatory_*` - player-level forced capture
//! - `test_legal_moves_*` - dispatch contract of [`legal_moves`]

use super::*;
use crate::error::EngineError;

fn board(rows: [&str; 8]) -> Board {
    Board::from_diagram(&rows).expect("test diagram should be valid")
}

fn sq(name: &str) -> Square {
    name.parse().expect("test square should be valid notation")
}

fn destinations(moves: &[Move]) -> Vec<String> {
    moves.iter().map(|mv| mv.to.to_string()).collect()
}

// ============================================================================
// Man Tests
// ============================================================================

#[test]
fn test_man_simple_moves_forward_only() {
    let board = board([
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . w . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
    ]);

    let moves = legal_moves(&board, Player::White, sq("d3")).unwrap();

    assert_eq!(destinations(&moves), vec!["c4", "e4"]);
    assert!(moves.iter().all(|mv| !mv.is_capture));
}

#[test]
fn test_black_man_moves_toward_row_seven() {
    let board = board([
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . b . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
    ]);

    let moves = legal_moves(&board, Player::Black, sq("e6")).unwrap();

    assert_eq!(destinations(&moves), vec!["d5", "f5"]);
}

#[test]
fn test_man_on_edge_has_one_step() {
    let board = Board::initial();

    let moves = legal_moves(&board, Player::White, sq("a3")).unwrap();

    assert_eq!(destinations(&moves), vec!["b4"]);
}

#[test]
fn test_man_blocked_by_own_pieces() {
    let board = Board::initial();

    // Back-row men are hemmed in by their own side
    let moves = legal_moves(&board, Player::White, sq("b2")).unwrap();

    assert!(moves.is_empty(), "b2 should be blocked, got {moves:?}");
}

#[test]
fn test_man_captures_in_all_four_directions() {
    let board = board([
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . b . b . . .",
        ". . . w . . . .",
        ". . b . b . . .",
        ". . . . . . . .",
        ". . . . . . . .",
    ]);

    let moves = legal_moves(&board, Player::White, sq("d4")).unwrap();

    assert_eq!(destinations(&moves), vec!["b6", "f6", "b2", "f2"]);
    assert!(moves.iter().all(|mv| mv.is_capture));
}

#[test]
fn test_man_cannot_jump_own_piece() {
    let board = board([
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . w . . .",
        ". . . w . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
    ]);

    let mut captures = Vec::new();
    find_captures(&board, sq("d3"), &mut captures);

    assert!(captures.is_empty());
}

#[test]
fn test_man_cannot_capture_without_landing_square() {
    let board = board([
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . b . .",
        ". . . . b . . .",
        ". . . w . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
    ]);

    assert!(!can_capture_from(&board, sq("d3")), "f5 is occupied");
}

#[test]
fn test_man_cannot_capture_off_board() {
    let board = board([
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        "b . . . . . . .",
        ". w . . . . . .",
    ]);

    assert!(!can_capture_from(&board, sq("b1")));
}

// ============================================================================
// King Tests
// ============================================================================

#[test]
fn test_king_slides_along_open_diagonals() {
    let board = board([
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        "W . . . . . . .",
    ]);

    let moves = legal_moves(&board, Player::White, sq("a1")).unwrap();

    assert_eq!(
        destinations(&moves),
        vec!["b2", "c3", "d4", "e5", "f6", "g7", "h8"]
    );
}

#[test]
fn test_king_slide_stops_before_occupied_square() {
    let board = board([
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . w . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        "W . . . . . . .",
    ]);

    let moves = legal_moves(&board, Player::White, sq("a1")).unwrap();

    assert_eq!(destinations(&moves), vec!["b2", "c3"]);
}

#[test]
fn test_king_captures_piece_at_distance() {
    let board = board([
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . w . . .",
        ". . . . . . . .",
        ". . B . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
    ]);

    let moves = legal_moves(&board, Player::Black, sq("c3")).unwrap();

    // d4 is open, so the king reaches e5 from two squares away
    assert!(moves.iter().all(|mv| mv.is_capture));
    assert_eq!(destinations(&moves), vec!["f6", "g7", "h8"]);
}

#[test]
fn test_king_lands_on_every_open_square_beyond_victim() {
    let board = board([
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . b . . . . .",
        ". . . . . . . .",
        "W . . . . . . .",
    ]);

    let mut captures = Vec::new();
    find_captures(&board, sq("a1"), &mut captures);

    assert_eq!(destinations(&captures), vec!["d4", "e5", "f6", "g7", "h8"]);
    assert!(captures.iter().all(|mv| mv.is_capture));
}

#[test]
fn test_king_landing_stops_at_next_occupied_square() {
    let board = board([
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . w . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . b . . . . .",
        ". . . . . . . .",
        "W . . . . . . .",
    ]);

    let mut captures = Vec::new();
    find_captures(&board, sq("a1"), &mut captures);

    assert_eq!(destinations(&captures), vec!["d4", "e5"]);
}

#[test]
fn test_king_without_opponent_on_line_has_no_capture() {
    let board = board([
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        "W . . . . . . .",
    ]);

    assert!(!can_capture_from(&board, sq("a1")));
}

#[test]
fn test_king_cannot_capture_two_pieces_in_a_row() {
    let board = board([
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . b . . . .",
        ". . b . . . . .",
        ". . . . . . . .",
        "W . . . . . . .",
    ]);

    assert!(!can_capture_from(&board, sq("a1")));
}

#[test]
fn test_king_cannot_capture_behind_own_piece() {
    let board = board([
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . b . . . .",
        ". . w . . . . .",
        ". . . . . . . .",
        "W . . . . . . .",
    ]);

    assert!(!can_capture_from(&board, sq("a1")));
}

#[test]
fn test_black_king_captures_white_pieces() {
    let board = board([
        ". . . . . . . B",
        ". . . . . . . .",
        ". . . . . w . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
    ]);

    let mut captures = Vec::new();
    find_captures(&board, sq("h8"), &mut captures);

    assert_eq!(destinations(&captures), vec!["e5", "d4", "c3", "b2", "a1"]);
}

#[test]
fn test_black_king_does_not_capture_black_pieces() {
    let board = board([
        ". . . . . . . B",
        ". . . . . . . .",
        ". . . . . b . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
    ]);

    assert!(!can_capture_from(&board, sq("h8")));
}

// ============================================================================
// Mandatory Capture Tests
// ============================================================================

#[test]
fn test_mandatory_capture_locks_out_simple_moves() {
    let board = board([
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . b . .",
        ". . . . w . . .",
        ". . . . . . . .",
        "w . . . . . . .",
    ]);

    assert!(can_player_capture(&board, Player::White));

    // a1 has a simple move to b2 but white must capture with e3
    let idle = legal_moves(&board, Player::White, sq("a1")).unwrap();
    assert!(idle.is_empty(), "non-capturing piece must have no moves, got {idle:?}");

    let capturing = legal_moves(&board, Player::White, sq("e3")).unwrap();
    assert_eq!(destinations(&capturing), vec!["g5"]);
}

#[test]
fn test_mandatory_capture_is_per_player() {
    let board = board([
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . b . .",
        ". . . . w . . .",
        ". . . . . . . .",
        ". . . . . . . .",
    ]);

    // Both men attack each other; each side is obliged to capture on its own turn
    assert!(can_player_capture(&board, Player::White));
    assert!(can_player_capture(&board, Player::Black));

    let black = legal_moves(&board, Player::Black, sq("f4")).unwrap();
    assert_eq!(destinations(&black), vec!["d2"]);
}

#[test]
fn test_no_capture_at_start() {
    let board = Board::initial();
    assert!(!can_player_capture(&board, Player::White));
    assert!(!can_player_capture(&board, Player::Black));
}

#[test]
fn test_all_legal_moves_from_start() {
    let board = Board::initial();

    let white = all_legal_moves(&board, Player::White);
    let black = all_legal_moves(&board, Player::Black);

    assert_eq!(white.len(), 7, "white has seven opening moves");
    assert_eq!(black.len(), 7, "black has seven opening moves");
    assert!(has_any_legal_move(&board, Player::White));
}

#[test]
fn test_all_legal_moves_only_captures_when_obliged() {
    let board = board([
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . b . .",
        ". . . . w . . .",
        ". . . . . . . .",
        "w . . . . . . .",
    ]);

    let moves = all_legal_moves(&board, Player::White);

    assert_eq!(moves, vec![Move::capture(sq("e3"), sq("g5"))]);
}

#[test]
fn test_has_any_legal_move_false_when_blocked() {
    let board = board([
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        ". . . . . . . .",
        "b . . . . . . .",
        ". b . . . . . .",
    ]);

    // Black men on the last rows cannot move forward and nothing to capture
    assert!(!has_any_legal_move(&board, Player::Black));
    assert!(!has_any_legal_move(&board, Player::White), "white has no pieces");
}

// ============================================================================
// legal_moves Contract Tests
// ============================================================================

#[test]
fn test_legal_moves_empty_cell() {
    let board = Board::initial();
    assert!(legal_moves(&board, Player::White, sq("d4")).unwrap().is_empty());
}

#[test]
fn test_legal_moves_opponent_piece() {
    let board = Board::initial();
    assert!(legal_moves(&board, Player::White, sq("b6")).unwrap().is_empty());
}

#[test]
fn test_legal_moves_out_of_bounds() {
    let board = Board::initial();
    assert_eq!(
        legal_moves(&board, Player::White, Square::new(8, 8)),
        Err(EngineError::OutOfBounds { row: 8, col: 8 })
    );
}

#[test]
fn test_legal_moves_never_target_occupied_or_off_board_squares() {
    let positions = [
        Board::initial(),
        board([
            "B . . . . . . .",
            ". w . . . . . .",
            ". . . . . . . .",
            ". . . b . b . .",
            ". . . . W . . .",
            ". . . b . . . .",
            ". . w . . . w .",
            ". . . . . . . W",
        ]),
    ];

    for board in &positions {
        for player in [Player::White, Player::Black] {
            for square in Board::squares() {
                for mv in legal_moves(board, player, square).unwrap() {
                    assert!(mv.to.is_on_board(), "{mv} leaves the board");
                    assert_eq!(
                        board.peek(mv.to),
                        Some(Piece::Empty),
                        "{mv} lands on an occupied square"
                    );
                }
            }
        }
    }
}
