//! Lexer for tokenizing preference files
//!
//! Scans a raw byte buffer into tokens for the parser, skipping whitespace
//! and `//` line comments. Line numbers are tracked across `\n`, `\r` and
//! `\r\n` terminators (the pair counts as a single line advance) so syntax
//! errors can name the offending line.

use crate::error::{Error, Result};
use crate::unquote::unquote;
use std::borrow::Cow;

/// Token types produced by the lexer
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token<'a> {
    /// Bare identifier (e.g. pref, user_pref, true, sticky)
    Ident(&'a str),
    /// String literal with escape sequences already resolved
    Str(Cow<'a, str>),
    /// Decimal integer literal
    Int(i64),
    /// Left parenthesis
    LeftParen,
    /// Right parenthesis
    RightParen,
    /// Comma
    Comma,
    /// Semicolon
    Semicolon,
    /// End of input
    Eof,
}

/// Lexer for tokenizing preference files
pub(crate) struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
    /// Current line number (1-indexed)
    line: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
        }
    }

    /// Syntax error at the current line
    pub(crate) fn syntax_error(&self) -> Error {
        Error::Syntax { line: self.line }
    }

    /// Get the next token from the input
    pub(crate) fn next_token(&mut self) -> Result<Token<'a>> {
        self.skip_whitespace_and_comments();

        let Some(&c) = self.input.get(self.pos) else {
            return Ok(Token::Eof);
        };

        match c {
            b'(' => {
                self.pos += 1;
                Ok(Token::LeftParen)
            }
            b')' => {
                self.pos += 1;
                Ok(Token::RightParen)
            }
            b',' => {
                self.pos += 1;
                Ok(Token::Comma)
            }
            b';' => {
                self.pos += 1;
                Ok(Token::Semicolon)
            }
            b'"' | b'\'' => self.lex_string(),
            b'-' | b'0'..=b'9' => self.lex_number(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => Ok(self.lex_identifier()),
            _ => Err(self.syntax_error()),
        }
    }

    /// Consume one line terminator (`\n`, `\r` or `\r\n`), advancing the
    /// line counter exactly once
    fn bump_line(&mut self) {
        if self.input[self.pos] == b'\r' && self.input.get(self.pos + 1) == Some(&b'\n') {
            self.pos += 1;
        }
        self.pos += 1;
        self.line += 1;
    }

    /// Skip whitespace and `//` line comments
    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&c) = self.input.get(self.pos) {
            match c {
                b' ' | b'\t' => self.pos += 1,
                b'\n' | b'\r' => self.bump_line(),
                b'/' if self.input.get(self.pos + 1) == Some(&b'/') => {
                    // Line comment: skip to end of line, leaving the
                    // terminator for the counting branch above
                    self.pos += 2;
                    while let Some(&c) = self.input.get(self.pos) {
                        if c == b'\n' || c == b'\r' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
    }

    /// Lex a bare identifier
    fn lex_identifier(&mut self) -> Token<'a> {
        let start = self.pos;

        while let Some(&c) = self.input.get(self.pos) {
            if c.is_ascii_alphanumeric() || c == b'_' {
                self.pos += 1;
            } else {
                break;
            }
        }

        // Identifier bytes are ASCII by construction
        let ident = std::str::from_utf8(&self.input[start..self.pos]).unwrap_or("");
        Token::Ident(ident)
    }

    /// Lex a quoted string literal
    ///
    /// Finds the matching closing quote, then hands the complete token to
    /// [`unquote`] for escape resolution. A raw line terminator before the
    /// closing quote is a syntax error; string tokens never span lines.
    fn lex_string(&mut self) -> Result<Token<'a>> {
        let start = self.pos;
        let quote = self.input[start];
        let mut i = start + 1;

        loop {
            let Some(&c) = self.input.get(i) else {
                return Err(self.syntax_error());
            };

            match c {
                b'\n' | b'\r' => return Err(self.syntax_error()),
                c if c == quote => break,
                b'\\' => match self.input.get(i + 1) {
                    None | Some(b'\n') | Some(b'\r') => return Err(self.syntax_error()),
                    Some(_) => i += 2,
                },
                _ => i += 1,
            }
        }

        let token = &self.input[start..=i];
        self.pos = i + 1;

        let decoded = unquote(token).map_err(|_| self.syntax_error())?;
        Ok(Token::Str(decoded))
    }

    /// Lex a decimal integer literal with an optional leading minus
    fn lex_number(&mut self) -> Result<Token<'a>> {
        let start = self.pos;

        if self.input.get(self.pos) == Some(&b'-') {
            self.pos += 1;
        }

        let digits_start = self.pos;
        while let Some(&c) = self.input.get(self.pos) {
            if c.is_ascii_digit() {
                self.pos += 1;
            } else {
                break;
            }
        }

        if self.pos == digits_start {
            return Err(self.syntax_error());
        }

        let literal = std::str::from_utf8(&self.input[start..self.pos])
            .map_err(|_| self.syntax_error())?;

        literal
            .parse::<i64>()
            .map(Token::Int)
            .map_err(|_| self.syntax_error())
    }
}
