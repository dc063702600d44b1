use crate::{
    escape::{self, UnicodeLong},
    LexSpecErrorKind, Position, Result, Token,
};

/// The forms of a single quoted literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharLiteral<'h> {
    /// `'c'`
    Plain(char),
    /// `'\c'`
    Escaped(char),
    /// `'\DDD'`
    Trigraph(char, char, char),
    /// `'\xHH'`
    HexPair(char, char),
    /// `'\uHHHH'`
    UnicodeShort(&'h str),
    /// `'\UHHHHHHHH'`
    UnicodeLong(&'h str),
    /// `'\Xx'`
    Category(&'h str),
}

// The `n` ASCII characters at the start of `s` if all satisfy `predicate` and are followed by the
// closing quote.
fn quoted_run(s: &str, n: usize, predicate: fn(&u8) -> bool) -> Option<&str> {
    let bytes = s.as_bytes();
    if bytes.len() > n && bytes[..n].iter().all(predicate) && bytes[n] == b'\'' {
        Some(&s[..n])
    } else {
        None
    }
}

impl<'h> CharLiteral<'h> {
    /// Recognize a literal at the start of `input`, which begins with the opening quote.
    /// Returns the literal and the number of characters it spans including both quotes.
    ///
    /// The longer escape forms take precedence, so `'\x41'` is a hex pair and `'\x'` is the
    /// escaped character `x`.
    pub(crate) fn recognize(input: &'h str) -> Option<(Self, usize)> {
        let body = input.strip_prefix('\'')?;
        if let Some(escaped) = body.strip_prefix('\\') {
            if let Some(digits) = escaped
                .strip_prefix('U')
                .and_then(|s| quoted_run(s, 8, u8::is_ascii_hexdigit))
            {
                return Some((CharLiteral::UnicodeLong(digits), 12));
            }
            if let Some(digits) = escaped
                .strip_prefix('u')
                .and_then(|s| quoted_run(s, 4, u8::is_ascii_hexdigit))
            {
                return Some((CharLiteral::UnicodeShort(digits), 8));
            }
            if let Some(digits) = escaped
                .strip_prefix('x')
                .and_then(|s| quoted_run(s, 2, u8::is_ascii_hexdigit))
            {
                if let [c1, c2] = digits.as_bytes() {
                    return Some((CharLiteral::HexPair(*c1 as char, *c2 as char), 6));
                }
            }
            if let Some(digits) = quoted_run(escaped, 3, u8::is_ascii_digit) {
                if let [c1, c2, c3] = digits.as_bytes() {
                    return Some((
                        CharLiteral::Trigraph(*c1 as char, *c2 as char, *c3 as char),
                        6,
                    ));
                }
            }
            let bytes = escaped.as_bytes();
            if bytes.len() > 2
                && bytes[0].is_ascii_uppercase()
                && bytes[1].is_ascii_lowercase()
                && bytes[2] == b'\''
            {
                return Some((CharLiteral::Category(&escaped[..2]), 5));
            }
            let c = escaped.chars().next()?;
            if !is_newline_char(c) && escaped[c.len_utf8()..].starts_with('\'') {
                return Some((CharLiteral::Escaped(c), 4));
            }
            return None;
        }
        let c = body.chars().next()?;
        if !is_newline_char(c) && body[c.len_utf8()..].starts_with('\'') {
            return Some((CharLiteral::Plain(c), 3));
        }
        None
    }

    /// Decode the literal to a token. `position` is the position of the opening quote.
    pub(crate) fn to_token(self, position: Position) -> Result<Token> {
        let unit = match self {
            CharLiteral::Plain(c) => single_code_unit(c, position)?,
            CharLiteral::Escaped(c) => single_code_unit(escape::escape(c), position)?,
            CharLiteral::Trigraph(c1, c2, c3) => escape::trigraph(c1, c2, c3)?,
            CharLiteral::HexPair(c1, c2) => escape::hex_pair(c1, c2)?,
            CharLiteral::UnicodeShort(digits) => escape::unicode_short(digits)?,
            CharLiteral::UnicodeLong(digits) => match escape::unicode_long(digits)? {
                UnicodeLong::Single(unit) => unit,
                UnicodeLong::Pair(..) => {
                    return Err(LexSpecErrorKind::UnsupportedSurrogatePair(position).into())
                }
            },
            CharLiteral::Category(category) => {
                return Ok(Token::UnicodeCategory(category.to_string()))
            }
        };
        Ok(Token::Char(unit))
    }
}

#[inline]
fn is_newline_char(c: char) -> bool {
    c == '\n' || c == '\r'
}

fn single_code_unit(c: char, position: Position) -> Result<u16> {
    let mut units = [0u16; 2];
    match c.encode_utf16(&mut units) {
        [unit] => Ok(*unit),
        _ => Err(LexSpecErrorKind::UnsupportedSurrogatePair(position).into()),
    }
}
