//! Board storage
//!
//! [`Board`] is a bounded container of 64 cells. It checks coordinates and
//! nothing else: rule correctness is the caller's job (the legality engine
//! and the game state machine).
//!
//! - [`Board::get`] / [`Board::set`] fail with [`EngineError::OutOfBounds`]
//! - [`Board::peek`] returns `None` off the board, so whole-board scans never
//!   need error control flow
//! - [`Board::relocate`] moves a piece without removing anything it jumped

use std::fmt;

use crate::constants::{BLACK_START_ROWS, BOARD_SIZE, WHITE_START_ROWS};
use crate::error::{EngineError, EngineResult};
use crate::types::{Move, Piece, Player, Square};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    grid: [[Piece; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// Board with every cell empty
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard opening: black men on rows 0-2, white men on rows 5-7, dark squares only
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for square in Self::squares().filter(|sq| sq.is_dark()) {
            let piece = if BLACK_START_ROWS.contains(&square.row) {
                Piece::Man(Player::Black)
            } else if WHITE_START_ROWS.contains(&square.row) {
                Piece::Man(Player::White)
            } else {
                continue;
            };
            board.grid[square.row as usize][square.col as usize] = piece;
        }
        board
    }

    /// Build a board from eight text rows, row 0 (rank 8) first.
    ///
    /// Cells use the diagram letters `.`, `w`, `b`, `W`, `B`; spaces are ignored.
    ///
    /// ```
    /// use shashki_engine::{Board, Piece, Player};
    ///
    /// let board = Board::from_diagram(&[
    ///     ". . . . . . . .",
    ///     ". . . . . . . .",
    ///     ". . . . . . . .",
    ///     ". . . . . . . .",
    ///     ". . . . . . . .",
    ///     ". . b . . . . .",
    ///     ". w . . . . . .",
    ///     ". . . . . . . .",
    /// ])
    /// .unwrap();
    /// assert_eq!(board.get(6, 1).unwrap(), Piece::Man(Player::White));
    /// ```
    pub fn from_diagram(rows: &[&str]) -> EngineResult<Self> {
        if rows.len() != BOARD_SIZE as usize {
            return Err(EngineError::InvalidDiagram {
                message: format!("expected {} rows, found {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != BOARD_SIZE as usize {
                return Err(EngineError::InvalidDiagram {
                    message: format!("row {} has {} cells: {:?}", row, cells.len(), line),
                });
            }
            for (col, c) in cells.into_iter().enumerate() {
                let piece = Piece::from_char(c).ok_or_else(|| EngineError::InvalidDiagram {
                    message: format!("unknown cell {:?} at row {}, column {}", c, row, col),
                })?;
                board.grid[row][col] = piece;
            }
        }
        Ok(board)
    }

    /// Pure bounds predicate
    #[inline]
    pub const fn is_valid_coordinate(row: i8, col: i8) -> bool {
        Square::new(row, col).is_on_board()
    }

    pub fn get(&self, row: i8, col: i8) -> EngineResult<Piece> {
        Self::check(row, col)?;
        Ok(self.grid[row as usize][col as usize])
    }

    pub fn set(&mut self, row: i8, col: i8, piece: Piece) -> EngineResult<()> {
        Self::check(row, col)?;
        self.grid[row as usize][col as usize] = piece;
        Ok(())
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> EngineResult<Piece> {
        self.get(square.row, square.col)
    }

    #[inline]
    pub fn set_piece_at(&mut self, square: Square, piece: Piece) -> EngineResult<()> {
        self.set(square.row, square.col, piece)
    }

    /// Cell content, or `None` if `square` is off the board
    #[inline]
    pub fn peek(&self, square: Square) -> Option<Piece> {
        square
            .is_on_board()
            .then(|| self.grid[square.row as usize][square.col as usize])
    }

    /// Copy the piece on `mv.from` to `mv.to` and clear `mv.from`.
    ///
    /// Does not remove jumped pieces and does not check legality. Both
    /// squares are bounds-checked before anything is written.
    pub fn relocate(&mut self, mv: &Move) -> EngineResult<()> {
        let piece = self.piece_at(mv.from)?;
        Self::check(mv.to.row, mv.to.col)?;
        self.set_piece_at(mv.to, piece)?;
        self.set_piece_at(mv.from, Piece::Empty)
    }

    /// All 64 squares in row-major order
    pub fn squares() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }

    /// Squares holding a man or king of `player`, row-major
    pub fn squares_of(&self, player: Player) -> impl Iterator<Item = Square> + '_ {
        Self::squares().filter(move |sq| {
            self.grid[sq.row as usize][sq.col as usize].belongs_to(player)
        })
    }

    /// Number of men and kings owned by `player`
    pub fn count(&self, player: Player) -> usize {
        self.squares_of(player).count()
    }

    fn check(row: i8, col: i8) -> EngineResult<()> {
        if Self::is_valid_coordinate(row, col) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds { row, col })
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for (row, cells) in self.grid.iter().enumerate() {
            write!(f, "{}", BOARD_SIZE as usize - row)?;
            for piece in cells {
                write!(f, " {}", piece.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
