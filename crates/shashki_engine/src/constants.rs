//! Board geometry shared by the board, the legality engine and the state machine.

/// Number of rows and columns on the board
pub const BOARD_SIZE: i8 = 8;

/// Diagonal step vectors as `(d_row, d_col)`.
///
/// Legal moves are produced in this order: up-left, up-right, down-left,
/// down-right ("up" being toward row 0).
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Rows holding black men in the opening position
pub const BLACK_START_ROWS: std::ops::Range<i8> = 0..3;

/// Rows holding white men in the opening position
pub const WHITE_START_ROWS: std::ops::Range<i8> = 5..8;

/// Men per side in the opening position
pub const PIECES_PER_SIDE: usize = 12;
