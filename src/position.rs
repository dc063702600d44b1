//! Module with the position type and functions.
//! A position is a struct that contains a line and column number and the byte offset into the
//! scanned input.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position in the input.
/// The line and column numbers are 1-based. Columns count characters, not bytes.
/// The offset is the 0-based byte offset from the start of the input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// The line number of the position.
    pub line: usize,
    /// The column number of the position.
    pub column: usize,
    /// The byte offset of the position.
    pub offset: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        debug_assert!(line > 0, "line number must be greater than 0");
        debug_assert!(column > 0, "column number must be greater than 0");
        Self {
            line,
            column,
            offset,
        }
    }

    /// Get the line number of the position.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the column number of the position.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Get the byte offset of the position.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The position after consuming the given non-newline character.
    #[inline]
    pub fn advance(self, c: char) -> Self {
        Self {
            column: self.column + 1,
            offset: self.offset + c.len_utf8(),
            ..self
        }
    }

    /// The position after consuming one newline event of `len` bytes, i.e. 1 for `\n` and 2 for
    /// `\r\n`.
    #[inline]
    pub fn advance_line(self, len: usize) -> Self {
        Self {
            line: self.line + 1,
            column: 1,
            offset: self.offset + len,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1, 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line: {}, column: {}", self.line, self.column)
    }
}

/// A trait for providing the position the scanner has currently reached in the input.
pub trait PositionProvider {
    /// Returns the current position.
    fn position(&self) -> Position;
}
