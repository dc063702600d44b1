use crate::Position;

/// A cursor over the input that tracks the current position.
///
/// Newline events (`\n` or `\r\n`) must be consumed with [`Cursor::eat_newline`], all other
/// characters with [`Cursor::bump`] or [`Cursor::eat_while`]. Cloning a cursor is cheap, which is
/// used for lookahead.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'h> {
    input: &'h str,
    position: Position,
}

impl<'h> Cursor<'h> {
    pub(crate) fn new(input: &'h str) -> Self {
        Self {
            input,
            position: Position::default(),
        }
    }

    /// The position of the next character.
    #[inline]
    pub(crate) fn position(&self) -> Position {
        self.position
    }

    /// The input not consumed yet.
    #[inline]
    pub(crate) fn rest(&self) -> &'h str {
        &self.input[self.position.offset..]
    }

    /// Peek the next character.
    #[inline]
    pub(crate) fn first(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Peek the character after the next one.
    #[inline]
    pub(crate) fn second(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Returns the length in bytes of the newline at the cursor, if there is one.
    #[inline]
    pub(crate) fn at_newline(&self) -> Option<usize> {
        let rest = self.rest().as_bytes();
        match rest {
            [b'\n', ..] => Some(1),
            [b'\r', b'\n', ..] => Some(2),
            _ => None,
        }
    }

    /// Consume one newline event and return its text.
    pub(crate) fn eat_newline(&mut self) -> Option<&'h str> {
        let len = self.at_newline()?;
        let start = self.position.offset;
        self.position = self.position.advance_line(len);
        Some(&self.input[start..start + len])
    }

    /// Consume the next character, which must not be the start of a newline event.
    pub(crate) fn bump(&mut self) -> Option<char> {
        debug_assert!(self.at_newline().is_none(), "use eat_newline for newlines");
        let c = self.first()?;
        self.position = self.position.advance(c);
        Some(c)
    }

    /// Consume the next `n` characters, none of which may be a newline.
    pub(crate) fn bump_n(&mut self, n: usize) {
        for _ in 0..n {
            self.bump();
        }
    }

    /// Consume characters while the predicate holds and return them.
    /// The predicate must reject `\n`.
    pub(crate) fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> &'h str {
        let start = self.position.offset;
        while let Some(c) = self.first() {
            if !predicate(c) {
                break;
            }
            debug_assert!(c != '\n', "use eat_newline for newlines");
            self.position = self.position.advance(c);
        }
        &self.input[start..self.position.offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_is_one_newline_event() {
        let mut cursor = Cursor::new("a\r\nb\nc");
        assert_eq!(cursor.bump(), Some('a'));
        assert_eq!(cursor.eat_newline(), Some("\r\n"));
        assert_eq!(cursor.position(), Position::new(2, 1, 3));
        assert_eq!(cursor.bump(), Some('b'));
        assert_eq!(cursor.eat_newline(), Some("\n"));
        assert_eq!(cursor.position(), Position::new(3, 1, 5));
        assert_eq!(cursor.first(), Some('c'));
    }

    #[test]
    fn test_lone_carriage_return_is_no_newline() {
        let mut cursor = Cursor::new("\rx");
        assert_eq!(cursor.eat_newline(), None);
        assert_eq!(cursor.bump(), Some('\r'));
        assert_eq!(cursor.position(), Position::new(1, 2, 1));
    }

    #[test]
    fn test_eat_while() {
        let mut cursor = Cursor::new("äbc1 rest");
        assert_eq!(cursor.eat_while(char::is_alphanumeric), "äbc1");
        assert_eq!(cursor.position(), Position::new(1, 5, 5));
        assert_eq!(cursor.first(), Some(' '));
        assert_eq!(cursor.second(), Some('r'));
        assert_eq!(cursor.rest(), " rest");
    }

    #[test]
    fn test_eof() {
        let mut cursor = Cursor::new("x");
        assert_eq!(cursor.rest(), "x");
        cursor.bump();
        assert_eq!(cursor.rest(), "");
        assert_eq!(cursor.first(), None);
        assert_eq!(cursor.bump(), None);
    }
}
