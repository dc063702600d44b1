use log::trace;

use crate::{
    internal::ScannerImpl, LexSpecError, LocatedToken, Position, PositionProvider, Result,
    ScannerConfig, Token, WithPositions,
};

/// The result of a peek operation.
#[derive(Debug, PartialEq)]
pub enum PeekResult {
    /// The peek operation found n tokens.
    Tokens(Vec<LocatedToken>),
    /// The peek operation found less than n tokens because the end of the input was reached.
    /// The last token is [`Token::EndOfInput`].
    TokensReachedEnd(Vec<LocatedToken>),
}

/// A lazily scanned stream of tokens.
///
/// The stream ends with exactly one [`Token::EndOfInput`]. If an error occurs the scan is not
/// resumed: the iterator ends, and [`TokenStream::next_located`] and [`TokenStream::peek_n`]
/// return the same error again.
///
/// * `'h` represents the lifetime of the input being scanned.
///
/// This stream can be created with the [`crate::Scanner::token_stream`] method.
#[derive(Debug)]
pub struct TokenStream<'h> {
    inner: ScannerImpl<'h>,
    finished: bool,
    // The error that ended the scan.
    error: Option<LexSpecError>,
}

impl<'h> TokenStream<'h> {
    /// Creates a new `TokenStream`.
    pub(crate) fn new(config: ScannerConfig, input: &'h str) -> Self {
        Self {
            inner: ScannerImpl::new(config, input),
            finished: false,
            error: None,
        }
    }

    /// Returns the next token with its positions.
    ///
    /// After the stream has ended by [`Token::EndOfInput`] every call returns
    /// [`Token::EndOfInput`] at the end of the input. After it has ended by an error every call
    /// returns that error.
    pub fn next_located(&mut self) -> Result<LocatedToken> {
        self.check_failed()?;
        if self.finished {
            let position = self.inner.position();
            return Ok(LocatedToken::new(Token::EndOfInput, position, position));
        }
        let result = self.inner.next_token();
        match &result {
            Ok(located) if located.token.is_end_of_input() => self.finished = true,
            Ok(_) => {}
            Err(e) => {
                trace!("Scan aborted: {}", e);
                self.finished = true;
                self.error = Some(e.clone());
            }
        }
        result
    }

    fn check_failed(&self) -> Result<()> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    /// Returns the next token.
    #[inline]
    pub fn next_token(&mut self) -> Result<Token> {
        self.next_located().map(|located| located.token)
    }

    /// Check if the stream has ended.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Peeks n tokens ahead without consuming them.
    /// The function returns [PeekResult]. Errors that would occur while scanning the peeked
    /// tokens are returned but do not end the stream. After the stream has ended by an error
    /// that error is returned.
    pub fn peek_n(&self, n: usize) -> Result<PeekResult> {
        self.check_failed()?;
        let mut tokens = Vec::with_capacity(n);
        if self.finished {
            let position = self.inner.position();
            tokens.push(LocatedToken::new(Token::EndOfInput, position, position));
            return Ok(PeekResult::TokensReachedEnd(tokens));
        }
        let mut scanner = self.inner.clone();
        while tokens.len() < n {
            let located = scanner.next_token()?;
            let reached_end = located.token.is_end_of_input();
            tokens.push(located);
            if reached_end {
                return Ok(PeekResult::TokensReachedEnd(tokens));
            }
        }
        Ok(PeekResult::Tokens(tokens))
    }

    /// An iterator that yields tokens with positions.
    pub fn with_positions(self) -> WithPositions<'h> {
        WithPositions::new(self)
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            None
        } else {
            Some(self.next_token())
        }
    }
}

impl PositionProvider for TokenStream<'_> {
    /// Returns the position where the next token will be searched.
    fn position(&self) -> Position {
        self.inner.position()
    }
}
