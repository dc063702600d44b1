use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Position;

/// The modes of the scanner.
///
/// The scanner starts in [`ScanMode::Token`]. All other modes scan a region of the input that has
/// an opening and a closing delimiter. They are entered by a call from the mode that found the
/// opening delimiter and return to it when the closing delimiter is found. The region modes carry
/// the position of their opening delimiter, which is reported when the region is not terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScanMode {
    /// Top level symbols of the lexer specification.
    Token,
    /// A string literal started at the given position.
    StringLiteral(Position),
    /// An action code block whose opening brace is at the given position.
    ActionCode(Position),
    /// A string literal inside action code, started at the given position.
    ActionCodeString(Position),
    /// A block comment started at the given position.
    Comment(Position),
}

impl ScanMode {
    /// The start position of the region scanned in this mode, if any.
    pub fn start(&self) -> Option<Position> {
        match self {
            ScanMode::Token => None,
            ScanMode::StringLiteral(p)
            | ScanMode::ActionCode(p)
            | ScanMode::ActionCodeString(p)
            | ScanMode::Comment(p) => Some(*p),
        }
    }

    /// The name of the mode.
    pub fn name(&self) -> &'static str {
        match self {
            ScanMode::Token => "token",
            ScanMode::StringLiteral(_) => "string",
            ScanMode::ActionCode(_) => "action code",
            ScanMode::ActionCodeString(_) => "string in action code",
            ScanMode::Comment(_) => "comment",
        }
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start() {
            Some(start) => write!(f, "{} started at {}", self.name(), start),
            None => write!(f, "{}", self.name()),
        }
    }
}
