//! Backend options and the query-string merger.
//!
//! Options come from two places: the URL query string and the caller. The
//! query string is decoded into an ordered [`Options`] mapping where the last
//! occurrence of a key wins, and caller-supplied options are then laid on top
//! of it so that the caller always has the final say.
//!
//! ```rust
//! use dburl_core::options::{Options, merge_query};
//!
//! let query = vec![
//!     ("sslmode".to_string(), "require".to_string()),
//!     ("reconnect".to_string(), "true".to_string()),
//! ];
//! let mut caller = Options::new();
//! caller.insert("reconnect", "false");
//!
//! let options = merge_query(&query, &caller);
//! assert_eq!(options.get_str("sslmode"), Some("require"));
//! assert_eq!(options.get_str("reconnect"), Some("false"));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single backend option value.
///
/// Values parsed from a query string are always [`OptionValue::Text`]; the
/// other variants exist for caller-supplied options and for hooks that build
/// nested structures (e.g. `ssl = { ca = ... }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Integer(i64),
    /// String value.
    Text(String),
    /// Nested mapping.
    Map(Options),
}

impl OptionValue {
    /// Get the string value, if this is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the nested mapping, if this is a map.
    pub fn as_map(&self) -> Option<&Options> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Check if the value counts as "not set" (empty text or empty map).
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Map(m) => m.is_empty(),
            Self::Bool(_) | Self::Integer(_) => false,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Text(s) => f.write_str(s),
            Self::Map(m) => {
                f.write_str("{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for OptionValue {
    fn from(i: i32) -> Self {
        Self::Integer(i as i64)
    }
}

impl From<Options> for OptionValue {
    fn from(m: Options) -> Self {
        Self::Map(m)
    }
}

/// Ordered mapping of backend option names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options {
    entries: IndexMap<String, OptionValue>,
}

impl Options {
    /// Create an empty options mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an option, returning the previous value.
    ///
    /// Replacing keeps the key at its original position.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get an option.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.get(key)
    }

    /// Get an option as a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(OptionValue::as_str)
    }

    /// Remove an option, preserving the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.entries.shift_remove(key)
    }

    /// Check if an option is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no options.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Lay `other` on top of `self`: keys present in both take `other`'s value.
    pub fn merge(&mut self, other: &Options) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (k, v) in iter {
            options.insert(k, v);
        }
        options
    }
}

impl<'a> IntoIterator for &'a Options {
    type Item = (&'a String, &'a OptionValue);
    type IntoIter = indexmap::map::Iter<'a, String, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Decode raw query pairs into options.
///
/// Keys and values are percent-decoded (`+` decodes to a space). Pairs whose
/// value is blank are dropped, and when a key repeats the last occurrence wins.
pub fn options_from_query(query: &[(String, String)]) -> Options {
    let mut options = Options::new();
    for (raw_key, raw_value) in query {
        let pair = format!("{}={}", raw_key, raw_value);
        for (key, value) in url::form_urlencoded::parse(pair.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            options.insert(key.into_owned(), value.into_owned());
        }
    }
    options
}

/// Build the options mapping for a record from the query string and the
/// caller's options; caller values override query values key by key.
pub fn merge_query(query: &[(String, String)], caller: &Options) -> Options {
    let mut options = options_from_query(query);
    options.merge(caller);
    options
}
