//! Serializer for preference maps
//!
//! Renders a [`PrefMap`] in the standard textual format, one statement per
//! line, sorted by key so the output is deterministic. Integer values must
//! fit the signed 32-bit range regardless of how they are stored; string,
//! boolean and integer are the only supported value kinds.

use crate::error::{Error, Result};
use crate::types::{Pref, PrefMap};
use serde_json::Value;
use std::io::Write;

impl Pref {
    /// Serialize a single preference entry, without a line terminator
    ///
    /// Returns the number of bytes written. Value errors are detected
    /// before anything is written for this entry.
    pub(crate) fn write_to<W: Write>(&self, w: &mut W, name: &str) -> Result<u64> {
        let mut out = String::new();

        out.push_str(if self.flags.is_user_pref() {
            "user_pref("
        } else {
            "pref("
        });

        quote_into(&mut out, name);
        out.push_str(", ");

        match &self.value {
            Value::String(s) => quote_into(&mut out, s),

            Value::Bool(true) => out.push_str("true"),
            Value::Bool(false) => out.push_str("false"),

            Value::Number(n) => match n.as_i64() {
                Some(v) if v > i64::from(i32::MAX) => {
                    return Err(Error::IntegerOverflow { value: v });
                }
                Some(v) if v < i64::from(i32::MIN) => {
                    return Err(Error::IntegerUnderflow { value: v });
                }
                Some(v) => out.push_str(&v.to_string()),
                None => {
                    return Err(unsupported(&self.value));
                }
            },

            _ => return Err(unsupported(&self.value)),
        }

        if self.flags.is_sticky() {
            out.push_str(", sticky");
        }

        if self.flags.is_locked() {
            out.push_str(", locked");
        }

        out.push_str(");");

        w.write_all(out.as_bytes())?;

        Ok(out.len() as u64)
    }
}

impl PrefMap {
    /// Write all preferences to a writer in the standard format, sorted by
    /// key
    ///
    /// Returns the total number of bytes written. On a per-entry value
    /// error the whole write fails with the offending key named in the
    /// error; a prefix of complete statements may already have been
    /// written. I/O errors are propagated unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mozprefs::{Pref, PrefFlags, PrefMap};
    ///
    /// let mut prefs = PrefMap::new();
    /// prefs.insert(
    ///     "a".to_string(),
    ///     Pref::with_flags(-1, PrefFlags::STICKY | PrefFlags::LOCKED | PrefFlags::USER_PREF),
    /// );
    ///
    /// let mut buf = Vec::new();
    /// let n = prefs.write_to(&mut buf)?;
    ///
    /// assert_eq!(buf, b"user_pref(\"a\", -1, sticky, locked);\n");
    /// assert_eq!(n, buf.len() as u64);
    /// # Ok::<(), mozprefs::Error>(())
    /// ```
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<u64> {
        let mut keys: Vec<&String> = self.keys().collect();
        keys.sort();

        let mut written = 0u64;

        for key in keys {
            let n = self[key.as_str()].write_to(w, key).map_err(|err| match err {
                Error::Io(err) => Error::Io(err),
                cause => Error::Entry {
                    name: key.clone(),
                    source: Box::new(cause),
                },
            })?;

            w.write_all(b"\n")?;
            written += n + 1;
        }

        Ok(written)
    }

    /// Render the map to a string in the standard format
    pub fn to_text(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;

        // write_to only emits valid UTF-8
        String::from_utf8(buf).map_err(|err| Error::Io(std::io::Error::other(err)))
    }
}

fn unsupported(value: &Value) -> Error {
    let kind = match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };

    Error::UnsupportedValue {
        value: value.clone(),
        kind,
    }
}

/// Append `s` as a double-quoted escaped string literal
///
/// Escapes the delimiter, backslashes and control characters; everything
/// else passes through as UTF-8. The output re-parses to the same value.
fn quote_into(out: &mut String, s: &str) {
    out.push('"');

    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x00'..='\x1f' | '\x7f' => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }

    out.push('"');
}
