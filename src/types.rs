//! Preference model: values, flags and the preference map
//!
//! A preference is a [`serde_json::Value`] restricted by contract to one of
//! three kinds (string, boolean, signed 32-bit integer) plus a small set of
//! flags. The restriction is enforced when writing, not when building the
//! map, so bulk imports can carry arbitrary values until serialized.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::ops::{BitOr, BitOrAssign, Deref, DerefMut};

/// Flags associated with a single preference
///
/// A typed bitset over the three known flag bits. Unknown bits are masked
/// off at every construction point, including deserialization.
///
/// # Example
///
/// ```rust
/// use mozprefs::PrefFlags;
///
/// let flags = PrefFlags::STICKY | PrefFlags::LOCKED;
/// assert!(flags.is_sticky());
/// assert!(flags.is_locked());
/// assert!(!flags.is_user_pref());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct PrefFlags(u8);

impl PrefFlags {
    /// No flags set
    pub const NONE: PrefFlags = PrefFlags(0);

    /// Sticky preferences are retained in the configuration even when they
    /// match the application default.
    pub const STICKY: PrefFlags = PrefFlags(1);

    /// Locked preferences can't be changed in the application user
    /// interface.
    pub const LOCKED: PrefFlags = PrefFlags(1 << 1);

    /// UserPref marks entries originating from a user override file
    /// ("user.js"); they serialize as `user_pref(` instead of `pref(`.
    pub const USER_PREF: PrefFlags = PrefFlags(1 << 2);

    const ALL: PrefFlags = PrefFlags(0b111);

    /// Whether every bit in `other` is also set in `self`
    pub fn contains(self, other: PrefFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_sticky(self) -> bool {
        self.contains(Self::STICKY)
    }

    pub fn is_locked(self) -> bool {
        self.contains(Self::LOCKED)
    }

    pub fn is_user_pref(self) -> bool {
        self.contains(Self::USER_PREF)
    }

    /// Raw bit representation
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for PrefFlags {
    type Output = PrefFlags;

    fn bitor(self, rhs: PrefFlags) -> PrefFlags {
        PrefFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for PrefFlags {
    fn bitor_assign(&mut self, rhs: PrefFlags) {
        self.0 |= rhs.0;
    }
}

impl From<u8> for PrefFlags {
    fn from(bits: u8) -> Self {
        PrefFlags(bits & Self::ALL.0)
    }
}

impl From<PrefFlags> for u8 {
    fn from(flags: PrefFlags) -> Self {
        flags.0
    }
}

/// A single named preference: value plus flags
///
/// The value must be a string, boolean or integer to be serializable;
/// anything else is rejected when the map is written out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pref {
    /// Preference value; string, boolean or signed 32-bit integer by
    /// contract
    pub value: Value,

    /// Flag bits for this entry
    #[serde(default)]
    pub flags: PrefFlags,
}

impl Pref {
    /// Create a preference with no flags set
    ///
    /// ```rust
    /// use mozprefs::Pref;
    ///
    /// let pref = Pref::new(true);
    /// assert_eq!(pref.value, serde_json::Value::Bool(true));
    /// ```
    pub fn new(value: impl Into<Value>) -> Self {
        Pref {
            value: value.into(),
            flags: PrefFlags::NONE,
        }
    }

    /// Create a preference with the given flags
    pub fn with_flags(value: impl Into<Value>, flags: PrefFlags) -> Self {
        Pref {
            value: value.into(),
            flags,
        }
    }
}

/// A collection of preferences keyed by name
///
/// Storage is unordered; serialization sorts keys for deterministic output.
/// Inserting under an existing name replaces the previous entry.
///
/// # Example
///
/// ```rust
/// use mozprefs::{Pref, PrefMap};
///
/// let mut prefs = PrefMap::new();
/// prefs.insert("javascript.enabled".to_string(), Pref::new(false));
/// assert_eq!(prefs.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefMap(HashMap<String, Pref>);

impl PrefMap {
    /// Create an empty preference map
    pub fn new() -> Self {
        PrefMap(HashMap::new())
    }

    /// Create an empty map with at least the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        PrefMap(HashMap::with_capacity(capacity))
    }

    /// Copy all entries of an untyped name-to-value mapping into a new
    /// preference map, giving every entry the same flags
    ///
    /// Values are taken as-is and only validated when serialized.
    ///
    /// ```rust
    /// use mozprefs::{PrefFlags, PrefMap};
    ///
    /// let mut values = serde_json::Map::new();
    /// values.insert("hello".to_string(), "world".into());
    ///
    /// let prefs = PrefMap::from_values(values, PrefFlags::USER_PREF);
    /// assert!(prefs["hello"].flags.is_user_pref());
    /// ```
    pub fn from_values(values: serde_json::Map<String, Value>, flags: PrefFlags) -> Self {
        values
            .into_iter()
            .map(|(key, value)| (key, Pref { value, flags }))
            .collect()
    }

    /// Copy all entries into an untyped name-to-value mapping, discarding
    /// flags
    pub fn to_values(&self) -> serde_json::Map<String, Value> {
        self.0
            .iter()
            .map(|(key, pref)| (key.clone(), pref.value.clone()))
            .collect()
    }
}

impl Deref for PrefMap {
    type Target = HashMap<String, Pref>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PrefMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<(String, Pref)> for PrefMap {
    fn from_iter<T: IntoIterator<Item = (String, Pref)>>(iter: T) -> Self {
        PrefMap(iter.into_iter().collect())
    }
}

impl Extend<(String, Pref)> for PrefMap {
    fn extend<T: IntoIterator<Item = (String, Pref)>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for PrefMap {
    type Item = (String, Pref);
    type IntoIter = std::collections::hash_map::IntoIter<String, Pref>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PrefMap {
    type Item = (&'a String, &'a Pref);
    type IntoIter = std::collections::hash_map::Iter<'a, String, Pref>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
