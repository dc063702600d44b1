use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{scanner::Scanner, LexSpecErrorKind, Result};

/// What happens when the input ends inside an action code block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CodeBlockAtEof {
    /// Fail with [`LexSpecErrorKind::UnterminatedCodeBlock`].
    #[default]
    Error,
    /// Silently end the token stream with [`crate::Token::EndOfInput`]. The unterminated code
    /// is dropped.
    EndOfInput,
}

/// The configuration of a scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScannerConfig {
    /// What happens when the input ends inside an action code block.
    pub code_block_at_eof: CodeBlockAtEof,
    /// The maximum number of nested regions, i.e. comments, action code blocks and strings,
    /// that may be open at the same time.
    pub max_nesting_depth: usize,
}

impl ScannerConfig {
    /// The default maximum nesting depth.
    pub const DEFAULT_MAX_NESTING_DEPTH: usize = 512;
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            code_block_at_eof: CodeBlockAtEof::default(),
            max_nesting_depth: Self::DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

/// A builder for creating a scanner.
#[derive(Debug, Clone, Default)]
pub struct ScannerBuilder {
    config: ScannerConfig,
}

impl ScannerBuilder {
    /// Creates a new scanner builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: ScannerConfig::default(),
        }
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: ScannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets what happens when the input ends inside an action code block.
    pub fn code_block_at_eof(mut self, code_block_at_eof: CodeBlockAtEof) -> Self {
        self.config.code_block_at_eof = code_block_at_eof;
        self
    }

    /// Sets the maximum number of regions that may be open at the same time.
    pub fn max_nesting_depth(mut self, max_nesting_depth: usize) -> Self {
        self.config.max_nesting_depth = max_nesting_depth;
        self
    }

    /// Builds the scanner from the scanner builder.
    pub fn build(self) -> Result<Scanner> {
        if self.config.max_nesting_depth == 0 {
            return Err(LexSpecErrorKind::InvalidConfiguration(
                "the maximum nesting depth must be greater than 0".to_string(),
            )
            .into());
        }
        debug!("Build scanner with {:?}", self.config);
        Ok(Scanner {
            config: self.config,
        })
    }
}
