use log::trace;

use super::{CharLiteral, Cursor};
use crate::{
    escape, CodeBlockAtEof, LexSpecErrorKind, LocatedToken, Position, Result, ScanMode,
    ScannerConfig, Token,
};

/// The scanner state for one input.
///
/// Every mode is a method. Token mode is [`ScannerImpl::next_token`], the region modes are
/// entered through [`ScannerImpl::region`] by the mode that found the opening delimiter and
/// return their buffer when they found the closing delimiter.
#[derive(Debug, Clone)]
pub(crate) struct ScannerImpl<'h> {
    cursor: Cursor<'h>,
    config: ScannerConfig,
    // The number of currently open regions.
    depth: usize,
}

#[inline]
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '\'' || c == '_'
}

#[inline]
fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

impl<'h> ScannerImpl<'h> {
    pub(crate) fn new(config: ScannerConfig, input: &'h str) -> Self {
        Self {
            cursor: Cursor::new(input),
            config,
            depth: 0,
        }
    }

    #[inline]
    pub(crate) fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Scan the next token in token mode. At the end of the input [`Token::EndOfInput`] is
    /// returned on every call.
    pub(crate) fn next_token(&mut self) -> Result<LocatedToken> {
        loop {
            let start = self.cursor.position();
            let Some(c) = self.cursor.first() else {
                return Ok(self.emit(Token::EndOfInput, start));
            };
            let token = match c {
                ' ' | '\t' => {
                    self.cursor.eat_while(is_blank);
                    continue;
                }
                '\n' | '\r' if self.cursor.at_newline().is_some() => {
                    self.cursor.eat_newline();
                    continue;
                }
                '\'' => self.char_literal(start)?,
                '{' => {
                    self.cursor.bump();
                    match self.region(ScanMode::ActionCode(start), |s| s.action_code(start))? {
                        Some(code) => Token::Code(code),
                        None => Token::EndOfInput,
                    }
                }
                '"' => {
                    self.cursor.bump();
                    let text = self.region(ScanMode::StringLiteral(start), |s| {
                        s.string_literal(start)
                    })?;
                    Token::String(text)
                }
                '(' if self.cursor.second() == Some('*') => {
                    self.cursor.bump_n(2);
                    self.region(ScanMode::Comment(start), |s| s.comment(start))?;
                    continue;
                }
                '/' if self.cursor.second() == Some('/') => {
                    // A '\r' of a closing "\r\n" is consumed here, the '\n' ends the line.
                    self.cursor.eat_while(|c| c != '\n');
                    continue;
                }
                '_' if !self.cursor.second().is_some_and(is_ident_char) => {
                    self.cursor.bump();
                    Token::Underscore
                }
                c if is_ident_start(c) => {
                    let ident = self.cursor.eat_while(is_ident_char);
                    Token::keyword(ident).unwrap_or_else(|| Token::Ident(ident.to_string()))
                }
                c => match Token::operator(c) {
                    Some(token) => {
                        self.cursor.bump();
                        token
                    }
                    None => {
                        return Err(LexSpecErrorKind::UnexpectedCharacter {
                            character: c,
                            position: start,
                        }
                        .into())
                    }
                },
            };
            return Ok(self.emit(token, start));
        }
    }

    fn emit(&self, token: Token, start: Position) -> LocatedToken {
        let located = LocatedToken::new(token, start, self.cursor.position());
        trace!("Token {}", located);
        located
    }

    /// Run a region mode, keeping track of the nesting depth.
    fn region<T>(
        &mut self,
        mode: ScanMode,
        scan: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        if self.depth >= self.config.max_nesting_depth {
            return Err(LexSpecErrorKind::NestingTooDeep {
                depth: self.config.max_nesting_depth,
                position: mode.start().unwrap_or_else(|| self.cursor.position()),
            }
            .into());
        }
        self.depth += 1;
        trace!("Enter mode {}", mode);
        let result = scan(self);
        self.depth -= 1;
        trace!("Leave mode {}", mode.name());
        result
    }

    fn char_literal(&mut self, start: Position) -> Result<Token> {
        match CharLiteral::recognize(self.cursor.rest()) {
            Some((literal, len)) => {
                self.cursor.bump_n(len);
                literal.to_token(start).map_err(|e| e.at(start))
            }
            None => Err(LexSpecErrorKind::UnexpectedCharacter {
                character: '\'',
                position: start,
            }
            .into()),
        }
    }

    /// String literal mode. The opening quote is consumed.
    fn string_literal(&mut self, start: Position) -> Result<String> {
        let mut buffer = String::new();
        loop {
            if let Some(newline) = self.cursor.eat_newline() {
                buffer.push_str(newline);
                continue;
            }
            let Some(c) = self.cursor.first() else {
                return Err(LexSpecErrorKind::UnterminatedString(start).into());
            };
            match c {
                '"' => {
                    self.cursor.bump();
                    return Ok(buffer);
                }
                '\\' => self.string_escape(&mut buffer)?,
                c if is_plain_string_char(c) => {
                    buffer.push_str(self.cursor.eat_while(is_plain_string_char));
                }
                c => {
                    self.cursor.bump();
                    buffer.push(c);
                }
            }
        }
    }

    // The cursor is at a backslash inside a string literal.
    fn string_escape(&mut self, buffer: &mut String) -> Result<()> {
        let position = self.cursor.position();
        self.cursor.bump();
        if self.cursor.eat_newline().is_some() {
            // Line continuation
            return Ok(());
        }
        if let Some(digits) = self
            .cursor
            .rest()
            .get(..3)
            .filter(|d| d.bytes().all(|b| b.is_ascii_digit()))
        {
            let mut chars = digits.chars();
            if let (Some(c1), Some(c2), Some(c3)) = (chars.next(), chars.next(), chars.next()) {
                let code = escape::trigraph(c1, c2, c3).map_err(|e| e.at(position))?;
                self.cursor.bump_n(3);
                buffer.push(char::from(code as u8));
                return Ok(());
            }
        }
        match self.cursor.first() {
            Some(e) if escape::is_named_escape(e) => {
                self.cursor.bump();
                buffer.push(escape::escape(e));
            }
            _ => buffer.push('\\'),
        }
        Ok(())
    }

    /// Comment mode. The opening `(*` is consumed.
    fn comment(&mut self, start: Position) -> Result<()> {
        loop {
            if self.cursor.eat_newline().is_some() {
                continue;
            }
            let position = self.cursor.position();
            let Some(c) = self.cursor.first() else {
                return Err(LexSpecErrorKind::UnterminatedComment(start).into());
            };
            match c {
                '*' if self.cursor.second() == Some(')') => {
                    self.cursor.bump_n(2);
                    return Ok(());
                }
                '(' if self.cursor.second() == Some('*') => {
                    self.cursor.bump_n(2);
                    self.region(ScanMode::Comment(position), |s| s.comment(position))
                        .map_err(|e| e.within(ScanMode::Comment(start)))?;
                }
                '"' => {
                    self.cursor.bump();
                    self.region(ScanMode::StringLiteral(position), |s| {
                        s.string_literal(position)
                    })
                    .map_err(|e| e.within(ScanMode::Comment(start)))?;
                }
                '\'' => {
                    // Skip character literals so that '"' doesn't open a string.
                    let len = CharLiteral::recognize(self.cursor.rest()).map_or(1, |(_, len)| len);
                    self.cursor.bump_n(len);
                }
                _ => {
                    let skipped = self
                        .cursor
                        .eat_while(|c| !matches!(c, '\'' | '(' | '*' | '"' | '\n' | '\r'));
                    if skipped.is_empty() {
                        self.cursor.bump();
                    }
                }
            }
        }
    }

    /// Action code mode. The opening brace is consumed.
    /// Returns `None` if the input ends inside the code and the configuration asks to end the
    /// token stream in this case.
    fn action_code(&mut self, start: Position) -> Result<Option<String>> {
        let mut buffer = String::new();
        loop {
            if let Some(newline) = self.cursor.eat_newline() {
                buffer.push_str(newline);
                continue;
            }
            let position = self.cursor.position();
            let Some(c) = self.cursor.first() else {
                return match self.config.code_block_at_eof {
                    CodeBlockAtEof::Error => {
                        Err(LexSpecErrorKind::UnterminatedCodeBlock(start).into())
                    }
                    CodeBlockAtEof::EndOfInput => {
                        trace!("End of input in action code started at {}", start);
                        Ok(None)
                    }
                };
            };
            match c {
                '}' => {
                    self.cursor.bump();
                    return Ok(Some(buffer));
                }
                '{' => {
                    self.cursor.bump();
                    let Some(inner) = self
                        .region(ScanMode::ActionCode(position), |s| s.action_code(position))
                        .map_err(|e| e.within(ScanMode::ActionCode(start)))?
                    else {
                        return Ok(None);
                    };
                    buffer.push('{');
                    buffer.push_str(&inner);
                    buffer.push('}');
                }
                '"' => {
                    self.cursor.bump();
                    let text = self
                        .region(ScanMode::ActionCodeString(position), |s| {
                            s.code_string(position)
                        })
                        .map_err(|e| e.within(ScanMode::ActionCode(start)))?;
                    buffer.push_str(&text);
                }
                '\\' if matches!(self.cursor.second(), Some('"' | '\\')) => {
                    self.copy_escaped_pair(&mut buffer);
                }
                _ => self.copy_run(&mut buffer, |c| {
                    !matches!(c, '\\' | '"' | '{' | '}' | '\n' | '\r')
                }),
            }
        }
    }

    /// String mode inside action code. The opening quote is consumed. Returns the string
    /// including both quotes.
    fn code_string(&mut self, start: Position) -> Result<String> {
        let mut buffer = String::from('"');
        loop {
            if let Some(newline) = self.cursor.eat_newline() {
                buffer.push_str(newline);
                continue;
            }
            let Some(c) = self.cursor.first() else {
                return Err(LexSpecErrorKind::UnterminatedCodeString(start).into());
            };
            match c {
                '"' => {
                    self.cursor.bump();
                    buffer.push('"');
                    return Ok(buffer);
                }
                '\\' if matches!(self.cursor.second(), Some('"' | '\\')) => {
                    self.copy_escaped_pair(&mut buffer);
                }
                _ => self.copy_run(&mut buffer, |c| !matches!(c, '\\' | '"' | '\n' | '\r')),
            }
        }
    }

    fn copy_escaped_pair(&mut self, buffer: &mut String) {
        buffer.extend(self.cursor.bump());
        buffer.extend(self.cursor.bump());
    }

    // Copy the characters accepted by `predicate`, or at least the next character, which must
    // not start a newline.
    fn copy_run(&mut self, buffer: &mut String, predicate: impl FnMut(char) -> bool) {
        let run = self.cursor.eat_while(predicate);
        if run.is_empty() {
            buffer.extend(self.cursor.bump());
        } else {
            buffer.push_str(run);
        }
    }
}

#[inline]
fn is_plain_string_char(c: char) -> bool {
    (c.is_whitespace() && c != '\n' && c != '\r') || c.is_alphanumeric()
}
