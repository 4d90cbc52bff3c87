//! Parser for Mozilla preference files (prefs.js, user.js)
//!
//! Converts the JavaScript-like preference syntax into a [`PrefMap`].
//! The parse is all-or-nothing: the first grammar mismatch aborts with
//! `Line <N>: Syntax error` and no partial map is returned.
//!
//! # Format
//!
//! ```text
//! pref("preference.name", value);
//! user_pref("preference.name", value, sticky, locked);
//! // comment
//! ```
//!
//! Values are string literals (double- or single-quoted), decimal integers,
//! or the bare keywords `true`/`false`. The optional `sticky` and `locked`
//! clauses may appear in any order after the value.
//!
//! # Example
//!
//! ```rust
//! use mozprefs::{parse, PrefFlags};
//!
//! let prefs = parse(
//!     br#"
//!     // This is a comment
//!     user_pref("browser.startup.homepage", "https://example.com");
//!     pref("javascript.enabled", true, locked);
//!     "#,
//! )?;
//!
//! assert_eq!(prefs.len(), 2);
//! assert!(prefs["browser.startup.homepage"].flags.is_user_pref());
//! assert!(prefs["javascript.enabled"].flags.is_locked());
//! # Ok::<(), mozprefs::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::lexer::{Lexer, Token};
use crate::types::{Pref, PrefFlags, PrefMap};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Parse preferences from a byte buffer
///
/// Later statements overwrite earlier ones with the same name. Blank input,
/// or input consisting solely of line terminators, yields an empty map.
///
/// # Example
///
/// ```rust
/// use mozprefs::{parse, Pref};
///
/// let prefs = parse(b"// Comment\npref('test', -100);")?;
/// assert_eq!(prefs["test"], Pref::new(-100));
/// # Ok::<(), mozprefs::Error>(())
/// ```
pub fn parse(input: &[u8]) -> Result<PrefMap> {
    Parser::new(input).parse()
}

/// Read preferences from a reader, buffering its full contents
pub fn read_from<R: Read>(mut r: R) -> Result<PrefMap> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;
    parse(&buf)
}

/// Parse a preference file directly from a file path
///
/// This is a convenience function that reads the file and parses it in one
/// step.
pub fn parse_file(path: &Path) -> Result<PrefMap> {
    let content = std::fs::read(path)?;
    parse(&content)
}

/// Parser for preference files
struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Current lookahead token; None until primed
    current: Option<Token<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a [u8]) -> Self {
        Parser {
            lexer: Lexer::new(input),
            current: None,
        }
    }

    /// Parse the entire input into a preference map
    fn parse(mut self) -> Result<PrefMap> {
        let mut prefs = PrefMap::new();

        self.advance()?;

        while self.current != Some(Token::Eof) {
            let (name, pref) = self.parse_statement()?;
            prefs.insert(name, pref);
        }

        Ok(prefs)
    }

    /// Parse one statement:
    /// `( "pref" | "user_pref" ) "(" name "," value flagclause* ")" ";"`
    fn parse_statement(&mut self) -> Result<(String, Pref)> {
        let mut flags = match self.current.take() {
            Some(Token::Ident("pref")) => PrefFlags::NONE,
            Some(Token::Ident("user_pref")) => PrefFlags::USER_PREF,
            _ => return Err(self.lexer.syntax_error()),
        };
        self.advance()?;

        self.expect(Token::LeftParen)?;
        let name = self.expect_string()?;
        self.expect(Token::Comma)?;
        let value = self.parse_value()?;
        flags |= self.parse_flag_clauses()?;
        self.expect(Token::RightParen)?;
        self.expect(Token::Semicolon)?;

        Ok((name, Pref { value, flags }))
    }

    /// Parse a value: string literal, integer literal, `true` or `false`
    fn parse_value(&mut self) -> Result<Value> {
        let value = match self.current.take() {
            Some(Token::Str(s)) => Value::from(s.into_owned()),
            Some(Token::Int(n)) => Value::from(n),
            Some(Token::Ident("true")) => Value::Bool(true),
            Some(Token::Ident("false")) => Value::Bool(false),
            _ => return Err(self.lexer.syntax_error()),
        };
        self.advance()?;

        Ok(value)
    }

    /// Parse trailing `, sticky` / `, locked` clauses
    ///
    /// Clauses are order-independent and repetition is idempotent. The
    /// terminating token (anything but a comma) is left for the caller.
    fn parse_flag_clauses(&mut self) -> Result<PrefFlags> {
        let mut flags = PrefFlags::NONE;

        while self.current == Some(Token::Comma) {
            self.advance()?;

            match self.current.take() {
                Some(Token::Ident("sticky")) => flags |= PrefFlags::STICKY,
                Some(Token::Ident("locked")) => flags |= PrefFlags::LOCKED,
                _ => return Err(self.lexer.syntax_error()),
            }
            self.advance()?;
        }

        Ok(flags)
    }

    /// Expect a specific token and consume it
    fn expect(&mut self, expected: Token<'a>) -> Result<()> {
        if self.current != Some(expected) {
            return Err(self.lexer.syntax_error());
        }

        self.advance()
    }

    /// Expect a string token and return its value
    fn expect_string(&mut self) -> Result<String> {
        match self.current.take() {
            Some(Token::Str(s)) => {
                let s = s.into_owned();
                self.advance()?;
                Ok(s)
            }
            _ => Err(self.lexer.syntax_error()),
        }
    }

    /// Advance to the next token
    fn advance(&mut self) -> Result<()> {
        self.current = Some(self.lexer.next_token()?);
        Ok(())
    }
}
