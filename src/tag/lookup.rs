//! Key lookup over tag strings
//!
//! Lookup follows the conventional reflection rules rather than the stricter
//! validator: it stops quietly at the first malformed pair, and when a key is
//! repeated the first occurrence wins.

use std::fmt;

use super::unquote_double;

/// A borrowed tag string with key lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructTag<'a>(&'a str);

impl<'a> StructTag<'a> {
    /// Wrap an already unquoted tag
    #[must_use]
    pub const fn new(tag: &'a str) -> Self {
        Self(tag)
    }

    /// The underlying tag text
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    /// Value for `key`, or an empty string when absent
    ///
    /// An empty result cannot tell an absent key from one with an empty
    /// value; use [`StructTag::lookup`] for that.
    #[must_use]
    pub fn get(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_default()
    }

    /// Value for the first occurrence of `key`
    ///
    /// ```
    /// use tagcheck::tag::StructTag;
    ///
    /// let tag = StructTag::new(r#"key:"value1" key:"value2""#);
    /// assert_eq!(tag.lookup("key").as_deref(), Some("value1"));
    /// assert_eq!(tag.lookup("other"), None);
    /// ```
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<String> {
        let mut rest = self.0;
        while let Some((name, quoted, tail)) = next_pair(rest) {
            if name == key {
                return unquote_double(quoted).ok();
            }
            rest = tail;
        }
        None
    }

    /// Iterate `(key, value)` pairs in order
    ///
    /// Iteration ends at the first malformed pair or value that fails to
    /// unquote.
    #[must_use]
    pub const fn pairs(&self) -> Pairs<'a> {
        Pairs { rest: self.0 }
    }
}

impl fmt::Display for StructTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl<'a> From<&'a str> for StructTag<'a> {
    fn from(tag: &'a str) -> Self {
        Self::new(tag)
    }
}

/// Iterator over the pairs of a [`StructTag`]
#[allow(missing_copy_implementations)]
#[derive(Debug, Clone)]
pub struct Pairs<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (&'a str, String);

    fn next(&mut self) -> Option<Self::Item> {
        let (name, quoted, tail) = next_pair(self.rest)?;
        let Ok(value) = unquote_double(quoted) else {
            self.rest = "";
            return None;
        };
        self.rest = tail;
        Some((name, value))
    }
}

/// Split off the next pair as `(key, quoted value, remainder)`
fn next_pair(tag: &str) -> Option<(&str, &str, &str)> {
    let tag = tag.trim_start_matches(' ');
    if tag.is_empty() {
        return None;
    }
    let bytes = tag.as_bytes();

    // A space, a quote or a control character ends the key
    let mut i = 0;
    while i < bytes.len() && is_key_byte(bytes[i]) {
        i += 1;
    }
    if i == 0 || i + 1 >= bytes.len() || bytes[i] != b':' || bytes[i + 1] != b'"' {
        return None;
    }
    let name = &tag[..i];
    let tag = &tag[i + 1..];
    let bytes = tag.as_bytes();

    let mut j = 1;
    while j < bytes.len() && bytes[j] != b'"' {
        if bytes[j] == b'\\' {
            j += 1;
        }
        j += 1;
    }
    if j >= bytes.len() {
        return None;
    }
    Some((name, &tag[..=j], &tag[j + 1..]))
}

const fn is_key_byte(b: u8) -> bool {
    b > b' ' && b != b':' && b != b'"' && b != 0x7f
}
