//! # mozprefs - Mozilla preference file parser and serializer
//!
//! This library parses and serializes the textual preference format used by
//! Mozilla-derived applications (`prefs.js`, `user.js`): statements of the
//! form `pref("name", value);` or `user_pref("name", value, sticky, locked);`
//! with `//` line comments and values of type string, boolean, or signed
//! 32-bit integer.
//!
//! ## Features
//!
//! - Parse preference files with full escape sequence support in string
//!   literals (both `"` and `'` quote styles)
//! - Syntax errors report the 1-based line number, with `\n`, `\r` and
//!   `\r\n` terminators all counted correctly
//! - Serialize preference maps to canonical, byte-for-byte round-trippable
//!   text, sorted by key
//! - `sticky` and `locked` flag clauses and the `user_pref`/`pref`
//!   distinction, modeled as a typed bitset
//! - Bulk conversion from and to untyped `serde_json` mappings
//!
//! ## Quick start
//!
//! ### Parsing
//!
//! ```rust
//! use mozprefs::{parse, Pref, PrefFlags};
//!
//! let prefs = parse(
//!     br#"
//!     // This is a comment
//!     user_pref("browser.startup.homepage", "https://example.com");
//!     pref("javascript.enabled", true);
//!     pref("network.proxy.port", 8080, locked);
//!     "#,
//! )?;
//!
//! assert_eq!(
//!     prefs["browser.startup.homepage"],
//!     Pref::with_flags("https://example.com", PrefFlags::USER_PREF)
//! );
//! assert!(prefs["network.proxy.port"].flags.is_locked());
//! # Ok::<(), mozprefs::Error>(())
//! ```
//!
//! ### Serializing
//!
//! ```rust
//! use mozprefs::{Pref, PrefMap};
//!
//! let mut prefs = PrefMap::new();
//! prefs.insert("b".to_string(), Pref::new(true));
//! prefs.insert("a".to_string(), Pref::new("hello"));
//!
//! let mut buf = Vec::new();
//! prefs.write_to(&mut buf)?;
//!
//! // Output is sorted by key for deterministic round trips
//! assert_eq!(buf, b"pref(\"a\", \"hello\");\npref(\"b\", true);\n");
//! # Ok::<(), mozprefs::Error>(())
//! ```
//!
//! ### Untyped conversion
//!
//! ```rust
//! use mozprefs::{PrefFlags, PrefMap};
//!
//! let mut values = serde_json::Map::new();
//! values.insert("enabled".to_string(), true.into());
//!
//! let prefs = PrefMap::from_values(values, PrefFlags::USER_PREF);
//! let back = prefs.to_values(); // flags are discarded
//! assert_eq!(back["enabled"], serde_json::Value::Bool(true));
//! ```
//!
//! ## Error handling
//!
//! All functions return [`Result<T, Error>`]. Parsing stops at the first
//! syntax error and reports the offending line:
//!
//! ```rust
//! use mozprefs::parse;
//!
//! let err = parse(b"\n\n\n?").unwrap_err();
//! assert_eq!(err.to_string(), "Line 4: Syntax error");
//! ```
//!
//! Serialization enforces the signed 32-bit integer range of the format and
//! rejects any value kind other than string, boolean or integer, naming the
//! offending key:
//!
//! ```rust
//! use mozprefs::{Pref, PrefMap};
//!
//! let mut prefs = PrefMap::new();
//! prefs.insert("too-big".to_string(), Pref::new(1i64 << 31));
//!
//! let err = prefs.write_to(&mut Vec::new()).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Pref \"too-big\": Integer overflow (2147483648 > 2147483647)"
//! );
//! ```
//!
//! ## See also
//!
//! - [prefs.js format reference](https://searchfox.org/mozilla-central/source/modules/libpref/parser/src/lib.rs)

pub use error::{Error, Result};
pub use parser::{parse, parse_file, read_from};
pub use types::{Pref, PrefFlags, PrefMap};

mod error;
mod lexer;
mod parser;
mod types;
mod unquote;
mod writer;
