use thiserror::Error;

use crate::{Position, ScanMode};

/// The result type for the `lexspec` crate.
pub type Result<T> = std::result::Result<T, LexSpecError>;

/// The error type for the `lexspec` crate.
///
/// Every error is fatal to the scan that raised it. On its way out of nested regions the error
/// collects the regions it was raised in, innermost first, without changing its kind.
/// Kinds raised by the escape decoder carry no position, the scanner records the literal they
/// were found in with [`LexSpecError::at`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct LexSpecError {
    /// The source of the error.
    pub source: Box<LexSpecErrorKind>,
    /// The regions that enclosed the region where the error was raised.
    pub enclosing: Vec<ScanMode>,
    /// The start of the literal the error was found in.
    pub location: Option<Position>,
}

impl LexSpecError {
    /// Create a new `LexSpecError`.
    pub fn new(kind: LexSpecErrorKind) -> Self {
        LexSpecError {
            source: Box::new(kind),
            enclosing: Vec::new(),
            location: None,
        }
    }

    /// Get the kind of the error.
    #[inline]
    pub fn kind(&self) -> &LexSpecErrorKind {
        &self.source
    }

    /// Record that the error was raised inside a region scanned in the given mode.
    pub fn within(mut self, mode: ScanMode) -> Self {
        self.enclosing.push(mode);
        self
    }

    /// Record the start of the literal the error was found in. The innermost location wins.
    pub fn at(mut self, position: Position) -> Self {
        self.location.get_or_insert(position);
        self
    }

    /// Get the enclosing regions, innermost first.
    #[inline]
    pub fn enclosing(&self) -> &[ScanMode] {
        &self.enclosing
    }

    /// Get the primary position of the error. This is the position of the kind if it has one,
    /// otherwise the location recorded with [`LexSpecError::at`].
    pub fn position(&self) -> Option<Position> {
        self.source.position().or(self.location)
    }
}

impl std::fmt::Display for LexSpecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)?;
        if let (None, Some(location)) = (self.source.position(), self.location) {
            write!(f, " at {}", location)?;
        }
        for mode in &self.enclosing {
            write!(f, "\n  while scanning {}", mode)?;
        }
        Ok(())
    }
}

impl From<LexSpecErrorKind> for LexSpecError {
    fn from(kind: LexSpecErrorKind) -> Self {
        LexSpecError::new(kind)
    }
}

/// The error kind type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexSpecErrorKind {
    /// A character that can't start any token.
    #[error("Unexpected character '{}' at {position}", .character.escape_default())]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        position: Position,
    },

    /// A digit was expected.
    #[error("Invalid digit '{}'", .0.escape_default())]
    InvalidDigit(char),

    /// A hexadecimal digit was expected.
    #[error("Invalid hex digit '{}'", .0.escape_default())]
    InvalidHexDigit(char),

    /// An escape sequence with the wrong number of digits.
    #[error("Invalid escape length {actual}, expected {expected} digits")]
    InvalidLength {
        /// The required number of digits.
        expected: usize,
        /// The number of digits found.
        actual: usize,
    },

    /// A decimal escape that does not denote an 8-bit character code.
    #[error("Character code {0} is out of range 0..=255")]
    InvalidCharCode(u32),

    /// A long unicode escape beyond the unicode range.
    #[error("Code point {0:#X} is out of the unicode range")]
    InvalidCodePoint(u32),

    /// A character literal that would need two UTF-16 code units.
    #[error("Unicode characters needing surrogate pairs are not supported in character literals at {0}")]
    UnsupportedSurrogatePair(Position),

    /// End of input inside a string literal.
    #[error("End of input in string started at {0}")]
    UnterminatedString(Position),

    /// End of input inside a string literal in action code.
    #[error("End of input in string in action code started at {0}")]
    UnterminatedCodeString(Position),

    /// End of input inside a block comment.
    #[error("End of input in comment started at {0}")]
    UnterminatedComment(Position),

    /// End of input inside action code.
    #[error("End of input in action code started at {0}")]
    UnterminatedCodeBlock(Position),

    /// Comments, action code or strings are nested deeper than configured.
    #[error("Nesting depth {depth} exceeded at {position}")]
    NestingTooDeep {
        /// The configured maximum depth.
        depth: usize,
        /// The opening delimiter that exceeded the depth.
        position: Position,
    },

    /// The scanner configuration is not usable.
    #[error("Invalid scanner configuration: {0}")]
    InvalidConfiguration(String),
}

impl LexSpecErrorKind {
    /// Get the position the error refers to, if any.
    pub fn position(&self) -> Option<Position> {
        match self {
            LexSpecErrorKind::UnexpectedCharacter { position, .. }
            | LexSpecErrorKind::NestingTooDeep { position, .. } => Some(*position),
            LexSpecErrorKind::UnsupportedSurrogatePair(p)
            | LexSpecErrorKind::UnterminatedString(p)
            | LexSpecErrorKind::UnterminatedCodeString(p)
            | LexSpecErrorKind::UnterminatedComment(p)
            | LexSpecErrorKind::UnterminatedCodeBlock(p) => Some(*p),
            LexSpecErrorKind::InvalidDigit(_)
            | LexSpecErrorKind::InvalidHexDigit(_)
            | LexSpecErrorKind::InvalidLength { .. }
            | LexSpecErrorKind::InvalidCharCode(_)
            | LexSpecErrorKind::InvalidCodePoint(_)
            | LexSpecErrorKind::InvalidConfiguration(_) => None,
        }
    }
}
