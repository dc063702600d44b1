/// Module that provides the recognition of character literals.
mod char_literal;
pub(crate) use char_literal::CharLiteral;

/// Module that provides a cursor over the input which tracks positions.
mod cursor;
pub(crate) use cursor::Cursor;

/// Module that provides the scanner modes and their implementation.
pub(crate) mod scanner_impl;
pub(crate) use scanner_impl::ScannerImpl;
