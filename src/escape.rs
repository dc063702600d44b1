//! Decoding of the digits and escape sequences used in character and string literals.
//!
//! All functions are pure. Character codes are returned as UTF-16 code units because character
//! literals may denote lone surrogates, e.g. `'\uD800'`.

use crate::{LexSpecErrorKind, Result};

const SURROGATE_LEAD_BASE: u32 = 0xD800;
const SURROGATE_TRAIL_BASE: u32 = 0xDC00;

/// The value of a long unicode escape `\UHHHHHHHH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnicodeLong {
    /// The upper 16 bits are zero, the value fits in one code unit.
    Single(u16),
    /// The value needs a UTF-16 surrogate pair, lead unit first.
    Pair(u16, u16),
}

/// Convert an ASCII decimal digit to its value.
pub fn digit(c: char) -> Result<u32> {
    c.to_digit(10)
        .ok_or_else(|| LexSpecErrorKind::InvalidDigit(c).into())
}

/// Convert a hexadecimal digit `[0-9a-fA-F]` to its value.
pub fn hex_digit(c: char) -> Result<u32> {
    c.to_digit(16)
        .ok_or_else(|| LexSpecErrorKind::InvalidHexDigit(c).into())
}

/// Decode a decimal escape of three digits, e.g. `\065`. The value must be an 8-bit character
/// code.
pub fn trigraph(c1: char, c2: char, c3: char) -> Result<u16> {
    let code = digit(c1)? * 100 + digit(c2)? * 10 + digit(c3)?;
    if code > 0xFF {
        return Err(LexSpecErrorKind::InvalidCharCode(code).into());
    }
    Ok(code as u16)
}

/// Decode a hexadecimal escape of two digits, e.g. `\x41`.
pub fn hex_pair(c1: char, c2: char) -> Result<u16> {
    Ok((hex_digit(c1)? * 16 + hex_digit(c2)?) as u16)
}

// Big endian combination of the hex digits in `s`, which must be exactly `len` characters.
fn hex_digits(s: &str, len: usize) -> Result<u32> {
    let actual = s.chars().count();
    if actual != len {
        return Err(LexSpecErrorKind::InvalidLength {
            expected: len,
            actual,
        }
        .into());
    }
    s.chars()
        .try_fold(0u32, |acc, c| -> Result<u32> { Ok((acc << 4) | hex_digit(c)?) })
}

/// Decode the four hex digits of a short unicode escape `\uHHHH` into one code unit.
pub fn unicode_short(s: &str) -> Result<u16> {
    Ok(hex_digits(s, 4)? as u16)
}

/// Decode the eight hex digits of a long unicode escape `\UHHHHHHHH`.
///
/// If the upper half is zero the lower half is the code unit. Otherwise the value is a code
/// point outside of the Basic Multilingual Plane and is encoded as a surrogate pair.
pub fn unicode_long(s: &str) -> Result<UnicodeLong> {
    let code_point = hex_digits(s, 8)?;
    let high = code_point >> 16;
    let low = code_point & 0xFFFF;
    if high == 0 {
        return Ok(UnicodeLong::Single(low as u16));
    }
    if code_point > char::MAX as u32 {
        return Err(LexSpecErrorKind::InvalidCodePoint(code_point).into());
    }
    let v = code_point - 0x10000;
    Ok(UnicodeLong::Pair(
        (SURROGATE_LEAD_BASE + (v >> 10)) as u16,
        (SURROGATE_TRAIL_BASE + (v & 0x3FF)) as u16,
    ))
}

/// Returns true if `c` has a named meaning after a backslash.
#[inline]
pub fn is_named_escape(c: char) -> bool {
    matches!(c, '\\' | '"' | '\'' | 'n' | 't' | 'b' | 'r')
}

/// Map the character after a backslash to the character it denotes.
/// Characters without a named meaning denote themselves.
pub fn escape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'b' => '\u{8}',
        'r' => '\r',
        c => c,
    }
}
