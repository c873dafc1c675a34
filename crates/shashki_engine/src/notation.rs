//! Algebraic square notation
//!
//! Files `a`-`h` map to columns 0-7; ranks `1`-`8` map to rows `8 - rank`, so
//! `a3` is `(5, 0)` and `h8` is `(0, 7)`. This is the form players type and the
//! form the text move log is written in.

use std::fmt;
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};
use crate::types::Square;

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = (b'a' + self.col as u8) as char;
            write!(f, "{}{}", file, 8 - self.row)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

impl FromStr for Square {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidNotation {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let file = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(invalid());
        }

        let col = (file as u8 - b'a') as i8;
        let row = 8 - (rank as u8 - b'0') as i8;
        Ok(Square::new(row, col))
    }
}
