//! # Core Types
//!
//! ## Pieces
//!
//! A cell holds a [`Piece`]: `Empty`, a `Man` or a `King`, each tagged with the
//! owning [`Player`]. Colour and rank are derived from the variant, so there is
//! no way to build a king without an owner or an empty cell with a colour.
//!
//! | Variant              | Diagram letter |
//! |----------------------|----------------|
//! | `Empty`              | `.`            |
//! | `Man(Player::White)` | `w`            |
//! | `Man(Player::Black)` | `b`            |
//! | `King(Player::White)`| `W`            |
//! | `King(Player::Black)`| `B`            |
//!
//! ## Squares
//!
//! [`Square`] uses signed `(row, col)` coordinates so that direction scans can
//! step past the edge and ask the board whether they are still on it. Row 0 is
//! rank 8 (black's home side), row 7 is rank 1 (white's home side).
//!
//! ## Moves
//!
//! A [`Move`] is a single leg. A multi-capture is a sequence of legs applied
//! one at a time, with legality re-queried between them.

use std::fmt;

use crate::constants::BOARD_SIZE;

/// One of the two sides. White moves first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    #[default]
    White,
    Black,
}

impl Player {
    /// Returns the other side
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row delta of a forward step for this side's men
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Player::White => -1,
            Player::Black => 1,
        }
    }

    /// Row on which this side's men are crowned
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Player::White => 0,
            Player::Black => BOARD_SIZE - 1,
        }
    }

    /// Single-letter tag used in the text move log (`W` / `B`)
    pub const fn letter(self) -> char {
        match self {
            Player::White => 'W',
            Player::Black => 'B',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => f.write_str("White"),
            Player::Black => f.write_str("Black"),
        }
    }
}

/// Content of a single board cell
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Piece {
    #[default]
    Empty,
    Man(Player),
    King(Player),
}

impl Piece {
    /// Owner of the piece, `None` for an empty cell
    #[inline]
    pub const fn color(self) -> Option<Player> {
        match self {
            Piece::Empty => None,
            Piece::Man(player) | Piece::King(player) => Some(player),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    #[inline]
    pub const fn is_man(self) -> bool {
        matches!(self, Piece::Man(_))
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, Piece::King(_))
    }

    /// True for men and kings owned by `player`
    #[inline]
    pub fn belongs_to(self, player: Player) -> bool {
        self.color() == Some(player)
    }

    /// True for men and kings owned by the opponent of `player`
    #[inline]
    pub fn is_opponent_of(self, player: Player) -> bool {
        self.color() == Some(player.opponent())
    }

    /// The crowned form of a man; kings and empty cells are returned unchanged
    #[must_use]
    pub const fn crowned(self) -> Piece {
        match self {
            Piece::Man(player) => Piece::King(player),
            other => other,
        }
    }

    /// Diagram letter for this cell
    pub const fn to_char(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::Man(Player::White) => 'w',
            Piece::Man(Player::Black) => 'b',
            Piece::King(Player::White) => 'W',
            Piece::King(Player::Black) => 'B',
        }
    }

    /// Parse a diagram letter
    pub const fn from_char(c: char) -> Option<Piece> {
        match c {
            '.' => Some(Piece::Empty),
            'w' => Some(Piece::Man(Player::White)),
            'b' => Some(Piece::Man(Player::Black)),
            'W' => Some(Piece::King(Player::White)),
            'B' => Some(Piece::King(Player::Black)),
            _ => None,
        }
    }
}

/// Board coordinate. May lie off the board until checked against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    /// True if both coordinates are within `[0, 7]`
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Dark squares are the only ones pieces ever stand on
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row as i16 + self.col as i16) % 2 != 0
    }

    /// Square shifted by `(d_row, d_col)`.
    ///
    /// Coordinates wrap at the `i8` limits instead of overflowing; a wrapped
    /// square is always off the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Square {
        Square {
            row: self.row.wrapping_add(d_row),
            col: self.col.wrapping_add(d_col),
        }
    }

    /// Squares from this one (exclusive) along `(d_row, d_col)` up to the edge
    pub fn ray(self, d_row: i8, d_col: i8) -> impl Iterator<Item = Square> {
        std::iter::successors(Some(self.offset(d_row, d_col)), move |sq| {
            Some(sq.offset(d_row, d_col))
        })
        .take_while(|sq| sq.is_on_board())
    }
}

/// A single leg of play: one step or one jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub is_capture: bool,
}

impl Move {
    /// A move request as entered by a player. The capture flag is re-derived by
    /// the engine, so requests never need to set it.
    pub const fn new(from: Square, to: Square) -> Self {
        Self::simple(from, to)
    }

    pub const fn simple(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            is_capture: false,
        }
    }

    pub const fn capture(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            is_capture: true,
        }
    }

    /// Unit diagonal step from `from` toward `to`
    pub const fn direction(&self) -> (i8, i8) {
        (
            (self.to.row as i16 - self.from.row as i16).signum() as i8,
            (self.to.col as i16 - self.from.col as i16).signum() as i8,
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Where the game stands after the last completed turn
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    #[default]
    InProgress,
    Won(Player),
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }

    pub const fn winner(self) -> Option<Player> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(player),
        }
    }
}
