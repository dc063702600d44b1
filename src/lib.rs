#![forbid(missing_docs)]
//! # `lexspec`
//! The `lexspec` crate provides the scanner of the specification language of a lexer generator.
//! A lexer specification consists of named regular definitions (`let`), rules (`rule ... =
//! parse`) built from character and string literals, character classes and operators, and
//! action code blocks in braces that are copied verbatim into the generated lexer.
//!
//! The scanner converts the text of a specification into a stream of [`Token`]s that is pulled
//! by a parser. It works with several modes: the token mode for the top level symbols and the
//! modes for string literals, block comments, action code and strings inside action code. These
//! regions may nest, e.g. comments in comments or braces in action code, and each mode returns
//! to the mode that entered it when its region ends.
//!
//! # Example
//! ```rust
//! use lexspec::{ScannerBuilder, Token};
//!
//! const INPUT: &str = r#"
//! (* Digits *)
//! let digit = ['0'-'9']
//! rule token = parse
//!   | digit+ { Int (lexeme lexbuf) }
//!   | eof    { Eof }
//! "#;
//!
//! fn main() {
//!     let scanner = ScannerBuilder::new()
//!         .build()
//!         .expect("ScannerBuilder error");
//!     for token in scanner.token_stream(INPUT).with_positions() {
//!         let token = token.expect("Scanner error");
//!         println!("{}: {:?}", token.start, token.token);
//!         if token.token == Token::EndOfInput {
//!             break;
//!         }
//!     }
//! }
//! ```
//!
//! # Crate features
//! - `serde`: Enabled by default. Tokens, positions and the scanner configuration can be
//!   serialized and deserialized with `serde`.

/// Module with error definitions
mod errors;
pub use errors::{LexSpecError, LexSpecErrorKind, Result};

/// Module with the decoding of escape sequences.
pub mod escape;

/// The module with internal implementation details.
mod internal;

/// Module that provides a position type
mod position;
pub use position::{Position, PositionProvider};

/// The module with the scanner.
mod scanner;
pub use scanner::Scanner;

/// The module with the scanner builder.
mod scanner_builder;
pub use scanner_builder::{CodeBlockAtEof, ScannerBuilder, ScannerConfig};

/// The module with the scanner modes.
mod scanner_mode;
pub use scanner_mode::ScanMode;

/// Module that provides the token types
mod token;
pub use token::{LocatedToken, Token};

/// Module that provides a TokenStream type
mod token_stream;
pub use token_stream::{PeekResult, TokenStream};

/// Module that provides a WithPositions type
mod with_positions;
pub use with_positions::WithPositions;
