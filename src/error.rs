//! Error types for preference parsing and serialization
//!
//! All public functions in the mozprefs library return [`Result<T, Error>`]
//! for consistent error handling.

/// Errors that can occur while parsing or serializing preference files
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Grammar mismatch while parsing. Reported for the first offending
    /// line; parsing stops and no partial map is returned.
    #[error("Line {line}: Syntax error")]
    Syntax {
        /// 1-based line number where the error was detected
        line: usize,
    },

    /// Malformed quoted string literal. During parsing this is converted
    /// into a positioned [`Error::Syntax`].
    #[error("Invalid string syntax")]
    StringSyntax,

    /// Integer value above the signed 32-bit range during serialization.
    /// The format stores integers as 32 bits regardless of host width.
    #[error("Integer overflow ({value} > 2147483647)")]
    IntegerOverflow { value: i64 },

    /// Integer value below the signed 32-bit range during serialization
    #[error("Integer underflow ({value} < -2147483648)")]
    IntegerUnderflow { value: i64 },

    /// Value kind other than string, boolean or integer during serialization
    #[error("Unsupported value {value} (type {kind})")]
    UnsupportedValue {
        value: serde_json::Value,
        kind: &'static str,
    },

    /// Serialization failure for a single preference, naming the key.
    /// The underlying cause remains inspectable through `source()`.
    #[error("Pref {name:?}: {source}")]
    Entry {
        name: String,
        #[source]
        source: Box<Error>,
    },

    /// I/O error from the underlying writer or reader
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
///
/// All public functions in the mozprefs library return this type alias.
///
/// # Example
///
/// ```rust
/// use mozprefs::{parse, Result};
///
/// fn parse_and_check(content: &[u8]) -> Result<()> {
///     let prefs = parse(content)?;
///     assert!(prefs.len() < 1000);
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;
