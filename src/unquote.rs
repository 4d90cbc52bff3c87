//! String literal decoding
//!
//! Interprets a single- or double-quoted literal token, resolving the
//! JavaScript-style escape sequences used in preference files. The input is
//! the raw token as it appears in the source, including both quote
//! characters.

use crate::error::{Error, Result};
use std::borrow::Cow;

/// Decode a quoted string literal into its string value.
///
/// Returns a borrowed slice of the interior when no escape sequence and no
/// embedded quote character is present. All malformed inputs are reported
/// as the single [`Error::StringSyntax`] condition.
pub(crate) fn unquote(token: &[u8]) -> Result<Cow<'_, str>> {
    let n = token.len();

    if n < 2 {
        return Err(Error::StringSyntax);
    }

    let quote = token[0];
    if quote != token[n - 1] || (quote != b'"' && quote != b'\'') {
        return Err(Error::StringSyntax);
    }

    let interior = &token[1..n - 1];

    if interior.contains(&b'\n') || interior.contains(&b'\r') {
        return Err(Error::StringSyntax);
    }

    // Avoid allocation in trivial cases
    if !interior.contains(&b'\\') && !interior.contains(&quote) {
        let s = std::str::from_utf8(interior).map_err(|_| Error::StringSyntax)?;
        return Ok(Cow::Borrowed(s));
    }

    let interior = std::str::from_utf8(interior).map_err(|_| Error::StringSyntax)?;
    let quote = quote as char;

    let mut out = String::with_capacity(interior.len());
    let mut chars = interior.chars().peekable();

    while let Some(c) = chars.next() {
        if c == quote {
            // Unescaped delimiter inside the literal
            return Err(Error::StringSyntax);
        }

        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next().ok_or(Error::StringSyntax)? {
            '"' => out.push('"'),
            '\'' => out.push('\''),
            '\\' => out.push('\\'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0c'),
            '0' => {
                // \0 is the null character; \00 would start an octal
                // escape, which the format does not support
                if chars.peek() == Some(&'0') {
                    return Err(Error::StringSyntax);
                }
                out.push('\x00');
            }
            'x' => {
                // Hex escape: \xNN, decoded as a code point in 0..=255
                let byte = hex_digits(&mut chars, 2)? as u8;
                out.push(byte as char);
            }
            'u' => {
                // Unicode escape: \uNNNN; surrogate code points are not
                // valid scalar values and are rejected
                let codepoint = hex_digits(&mut chars, 4)?;
                let c = char::from_u32(codepoint).ok_or(Error::StringSyntax)?;
                out.push(c);
            }
            _ => return Err(Error::StringSyntax),
        }
    }

    Ok(Cow::Owned(out))
}

/// Consume exactly `count` hex digits and return their value
fn hex_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, count: usize) -> Result<u32> {
    let mut value = 0u32;

    for _ in 0..count {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or(Error::StringSyntax)?;
        value = value * 16 + digit;
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unquote_str(s: &str) -> Result<Cow<'_, str>> {
        unquote(s.as_bytes())
    }

    #[test]
    fn test_unquote_double_quoted() {
        assert_eq!(unquote_str(r#""hello world""#).unwrap(), "hello world");
    }

    #[test]
    fn test_unquote_single_quoted() {
        assert_eq!(unquote_str("'hello world'").unwrap(), "hello world");
    }

    #[test]
    fn test_unquote_empty_string() {
        assert_eq!(unquote_str(r#""""#).unwrap(), "");
    }

    #[test]
    fn test_unquote_borrows_without_escapes() {
        let result = unquote_str(r#""plain""#).unwrap();
        assert!(matches!(result, Cow::Borrowed("plain")));
    }

    #[test]
    fn test_unquote_other_quote_style_passes_through() {
        assert_eq!(unquote_str(r#"'say "hi"'"#).unwrap(), "say \"hi\"");
        assert_eq!(unquote_str(r#""it's""#).unwrap(), "it's");
    }

    #[test]
    fn test_unquote_escaped_quotes() {
        assert_eq!(
            unquote_str(r#""value with \"quotes\"""#).unwrap(),
            "value with \"quotes\""
        );
        assert_eq!(unquote_str(r"'it\'s'").unwrap(), "it's");
    }

    #[test]
    fn test_unquote_backslashes() {
        assert_eq!(
            unquote_str(r#""C:\\path\\to\\file""#).unwrap(),
            "C:\\path\\to\\file"
        );
    }

    #[test]
    fn test_unquote_control_escapes() {
        assert_eq!(
            unquote_str(r#""a\nb\tc\rd\be\ff\0g""#).unwrap(),
            "a\nb\tc\rd\x08e\x0cf\x00g"
        );
    }

    #[test]
    fn test_unquote_null_escape_followed_by_digit() {
        assert_eq!(unquote_str(r#""test\01""#).unwrap(), "test\x001");
    }

    #[test]
    fn test_unquote_octal_escape_rejected() {
        assert!(unquote_str(r#""test\00""#).is_err());
    }

    #[test]
    fn test_unquote_hex_escape() {
        assert_eq!(unquote_str(r#""\x41""#).unwrap(), "A");
        assert_eq!(unquote_str(r#""\xff""#).unwrap(), "\u{ff}");
    }

    #[test]
    fn test_unquote_unicode_escape() {
        assert_eq!(unquote_str(r#""\u0041""#).unwrap(), "A");
        assert_eq!(unquote_str(r#""\u20ac""#).unwrap(), "\u{20ac}");
    }

    #[test]
    fn test_unquote_surrogate_rejected() {
        assert!(unquote_str(r#""\ud800""#).is_err());
        assert!(unquote_str(r#""\udfff""#).is_err());
    }

    #[test]
    fn test_unquote_incomplete_escapes() {
        assert!(unquote_str(r#""\x4""#).is_err());
        assert!(unquote_str(r#""\u004""#).is_err());
        assert!(unquote_str(r#""\""#).is_err());
    }

    #[test]
    fn test_unquote_unknown_escape_rejected() {
        assert!(unquote_str(r#""\q""#).is_err());
    }

    #[test]
    fn test_unquote_too_short() {
        assert!(unquote_str("").is_err());
        assert!(unquote_str("\"").is_err());
    }

    #[test]
    fn test_unquote_mismatched_quotes() {
        assert!(unquote_str(r#""abc'"#).is_err());
        assert!(unquote_str(r#"'abc""#).is_err());
        assert!(unquote_str("`abc`").is_err());
    }

    #[test]
    fn test_unquote_embedded_newline_rejected() {
        assert!(unquote_str("\"a\nb\"").is_err());
        assert!(unquote_str("\"a\rb\"").is_err());
    }

    #[test]
    fn test_unquote_embedded_delimiter_rejected() {
        assert!(unquote_str("\"a\"b\\n\"").is_err());
    }
}
