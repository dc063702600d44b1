use std::{fmt, sync::LazyLock};

use rustc_hash::FxHashMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Position;

/// A token of the lexer specification language.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Token {
    /// The keyword `rule`.
    Rule,
    /// The keyword `parse`.
    Parse,
    /// The keyword `eof`.
    Eof,
    /// The keyword `let`.
    Let,
    /// The keyword `and`.
    And,
    /// A character literal, decoded to one UTF-16 code unit.
    Char(u16),
    /// A string literal with its escapes decoded.
    String(String),
    /// An identifier.
    Ident(String),
    /// A two letter unicode general category like `Lu`, written as `'\Lu'`.
    UnicodeCategory(String),
    /// The verbatim text between the braces of an action code block.
    Code(String),
    /// `|`
    Bar,
    /// `.`
    Dot,
    /// `+`
    Plus,
    /// `*`
    Star,
    /// `?`
    QMark,
    /// `=`
    Equals,
    /// `[`
    LBrack,
    /// `]`
    RBrack,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `_`
    Underscore,
    /// `^`
    Hat,
    /// `-`
    Dash,
    /// The end of the input. It is always the last token of a token stream.
    EndOfInput,
}

static KEYWORDS: LazyLock<FxHashMap<&'static str, Token>> = LazyLock::new(|| {
    let mut keywords = FxHashMap::default();
    keywords.insert("rule", Token::Rule);
    keywords.insert("parse", Token::Parse);
    keywords.insert("eof", Token::Eof);
    keywords.insert("let", Token::Let);
    keywords.insert("and", Token::And);
    keywords
});

impl Token {
    /// Returns the keyword token for a complete identifier, if it is a reserved word.
    pub fn keyword(ident: &str) -> Option<Token> {
        KEYWORDS.get(ident).cloned()
    }

    /// Returns the operator token for a single character.
    pub fn operator(c: char) -> Option<Token> {
        let token = match c {
            '|' => Token::Bar,
            '.' => Token::Dot,
            '+' => Token::Plus,
            '*' => Token::Star,
            '?' => Token::QMark,
            '=' => Token::Equals,
            '[' => Token::LBrack,
            ']' => Token::RBrack,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '_' => Token::Underscore,
            '^' => Token::Hat,
            '-' => Token::Dash,
            _ => return None,
        };
        Some(token)
    }

    /// Check if the token is the end of input.
    #[inline]
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Token::EndOfInput)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Rule => write!(f, "rule"),
            Token::Parse => write!(f, "parse"),
            Token::Eof => write!(f, "eof"),
            Token::Let => write!(f, "let"),
            Token::And => write!(f, "and"),
            Token::Char(c) => write!(f, "'\\u{:04X}'", c),
            Token::String(s) => write!(f, "\"{}\"", s.escape_default()),
            Token::Ident(s) => write!(f, "{}", s),
            Token::UnicodeCategory(s) => write!(f, "'\\{}'", s),
            Token::Code(s) => write!(f, "{{{}}}", s),
            Token::Bar => write!(f, "|"),
            Token::Dot => write!(f, "."),
            Token::Plus => write!(f, "+"),
            Token::Star => write!(f, "*"),
            Token::QMark => write!(f, "?"),
            Token::Equals => write!(f, "="),
            Token::LBrack => write!(f, "["),
            Token::RBrack => write!(f, "]"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Underscore => write!(f, "_"),
            Token::Hat => write!(f, "^"),
            Token::Dash => write!(f, "-"),
            Token::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A token with its start and end positions.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocatedToken {
    /// The token.
    pub token: Token,
    /// The position of the first character of the token.
    pub start: Position,
    /// The position after the last character of the token.
    /// The end position is exclusive.
    pub end: Position,
}

impl LocatedToken {
    pub(crate) fn new(token: Token, start: Position, end: Position) -> Self {
        Self { token, start, end }
    }

    /// Get the token.
    #[inline]
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Get the byte range of the token in the input.
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start.offset..self.end.offset
    }

    /// For a [`Token::Code`] returns the code with its first line indented to the column of the
    /// opening brace, so that all lines of the code keep their indentation relative to each
    /// other.
    pub fn indented_code(&self) -> Option<String> {
        match &self.token {
            Token::Code(code) => {
                let mut indented = " ".repeat(self.start.column);
                indented.push_str(code);
                Some(indented)
            }
            _ => None,
        }
    }
}

impl fmt::Display for LocatedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.token, self.start)
    }
}
