use crate::{LocatedToken, Result, ScannerConfig, TokenStream};

/// A scanner for lexer specification files.
///
/// The scanner recognizes the keywords, operators, identifiers and literals of the language and
/// extracts the verbatim text of action code blocks. Comments, strings and action code are
/// scanned in their own modes, which may nest. This is the same concept as the *Start
/// conditions* known from Flex, except that the modes are entered and left like function calls.
///
/// To create a scanner, use the [`crate::ScannerBuilder`].
/// A scanner holds only its configuration and can scan any number of inputs.
#[derive(Debug, Clone)]
pub struct Scanner {
    pub(crate) config: ScannerConfig,
}

impl Scanner {
    /// Returns the stream of tokens of the given input.
    /// The tokens are scanned lazily when they are pulled from the stream.
    pub fn token_stream<'h>(&self, input: &'h str) -> TokenStream<'h> {
        TokenStream::new(self.config.clone(), input)
    }

    /// Scans the whole input. The last token is always [`crate::Token::EndOfInput`].
    pub fn tokenize(&self, input: &str) -> Result<Vec<LocatedToken>> {
        self.token_stream(input).with_positions().collect()
    }

    /// Returns the configuration of the scanner.
    #[inline]
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }
}
