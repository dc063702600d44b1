use crate::{LocatedToken, Position, PositionProvider, Result, TokenStream};

/// An iterator over all tokens with positions.
///
/// Like [`TokenStream`] it yields [`crate::Token::EndOfInput`] or an error once and then ends.
#[derive(Debug)]
pub struct WithPositions<'h> {
    stream: TokenStream<'h>,
}

impl<'h> WithPositions<'h> {
    /// Create a new `WithPositions` iterator.
    pub(crate) fn new(stream: TokenStream<'h>) -> Self {
        Self { stream }
    }

    /// Get back the underlying token stream.
    pub fn into_inner(self) -> TokenStream<'h> {
        self.stream
    }
}

impl Iterator for WithPositions<'_> {
    type Item = Result<LocatedToken>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stream.is_finished() {
            None
        } else {
            Some(self.stream.next_located())
        }
    }
}

impl PositionProvider for WithPositions<'_> {
    fn position(&self) -> Position {
        self.stream.position()
    }
}
