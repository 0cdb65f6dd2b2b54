//! Serde support and the JSON string-array exchange format.
//!
//! A trie serializes as a sequence of its stored strings in ascending order
//! and deserializes from any sequence of strings. For [`StringTrie`] the JSON
//! form is a plain array, e.g. `["apple","apply"]`.
//!
//! [`StringTrie`]: crate::StringTrie

use std::fmt;
use std::io;
use std::str::FromStr;

use log::debug;
use serde::de::{DeserializeOwned, DeserializeSeed, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;
use crate::trie::Trie;
use crate::unit::{AsUnits, Key};

impl<K> Serialize for Trie<K>
where
    K: Key + Ord + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut keys: Vec<K> = self.iter().collect();
        keys.sort();
        serializer.collect_seq(keys)
    }
}

impl<'de, K> Deserialize<'de> for Trie<K>
where
    K: Key + AsUnits<<K as Key>::Unit> + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut trie = Trie::new();
        TrieSeed(&mut trie).deserialize(deserializer)?;
        Ok(trie)
    }
}

/// Deserializes a sequence of strings straight into an existing trie.
///
/// Each element is inserted as soon as it is parsed, so no intermediate list
/// is built. On error, the elements read before the failure stay inserted.
/// The value produced is the number of newly stored strings.
///
/// # Examples
///
/// ```
/// use prefix_trie::{StringTrie, TrieSeed};
/// use serde::de::DeserializeSeed;
///
/// let mut trie = StringTrie::new();
/// trie.insert("kept");
///
/// let mut de = serde_json::Deserializer::from_str(r#"["kept", "new"]"#);
/// let inserted = TrieSeed(&mut trie).deserialize(&mut de).unwrap();
///
/// assert_eq!(inserted, 1);
/// assert_eq!(trie.len(), 2);
/// ```
pub struct TrieSeed<'t, K: Key>(pub &'t mut Trie<K>);

impl<'de, 't, K> DeserializeSeed<'de> for TrieSeed<'t, K>
where
    K: Key + AsUnits<<K as Key>::Unit> + Deserialize<'de>,
{
    type Value = usize;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<usize, D::Error> {
        deserializer.deserialize_seq(self)
    }
}

impl<'de, 't, K> Visitor<'de> for TrieSeed<'t, K>
where
    K: Key + AsUnits<<K as Key>::Unit> + Deserialize<'de>,
{
    type Value = usize;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an array of strings")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<usize, A::Error> {
        let mut inserted = 0;
        while let Some(key) = seq.next_element::<K>()? {
            if self.0.insert(&key) {
                inserted += 1;
            }
        }
        Ok(inserted)
    }
}

/// JSON formatter that keeps the output pure ASCII.
///
/// serde_json already escapes quotes, backslashes and control characters; this
/// additionally writes DEL and every non-ASCII character as `\uXXXX`, using
/// surrogate pairs above U+FFFF.
struct AsciiFormatter;

impl serde_json::ser::Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() && c != '\x7f' {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut buf = [0u16; 2];
            for unit in c.encode_utf16(&mut buf).iter() {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

impl<K: Key> Trie<K> {
    /// Writes the stored strings as a compact, ASCII-only JSON array in
    /// ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert_many(&["zebra", "apple", "line\nbreak", "café"]);
    ///
    /// assert_eq!(
    ///     trie.to_json().unwrap(),
    ///     r#"["apple","caf\u00e9","line\nbreak","zebra"]"#
    /// );
    /// ```
    pub fn to_json(&self) -> Result<String, Error>
    where
        K: Ord + Serialize,
    {
        let mut out = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, AsciiFormatter);
        self.serialize(&mut serializer)?;
        String::from_utf8(out).map_err(|err| Error::Encode(err.to_string()))
    }

    /// Replaces the contents of the trie with the strings of a JSON array.
    ///
    /// The trie is cleared first. Elements are inserted as they are parsed and
    /// parsing stops at the first error, so after a failure the trie holds the
    /// elements read up to that point: neither the old nor the new complete set.
    /// Returns the number of strings stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// assert_eq!(trie.from_json(r#"["hello", "world", "hello"]"#).unwrap(), 2);
    /// assert!(trie.contains_key("world"));
    ///
    /// assert!(trie.from_json(r#"["test\x"]"#).is_err());
    /// ```
    pub fn from_json(&mut self, json: &str) -> Result<usize, Error>
    where
        K: AsUnits<<K as Key>::Unit> + DeserializeOwned,
    {
        self.clear();

        let mut deserializer = serde_json::Deserializer::from_str(json);
        let outcome = TrieSeed(&mut *self)
            .deserialize(&mut deserializer)
            .and_then(|inserted| deserializer.end().map(|()| inserted));

        match outcome {
            Ok(inserted) => {
                debug!("loaded {} strings from json", inserted);
                Ok(inserted)
            }
            Err(err) => {
                debug!(
                    "rejected json after loading {} strings: {}",
                    self.len(),
                    err
                );
                Err(err.into())
            }
        }
    }
}

impl<K> FromStr for Trie<K>
where
    K: Key + AsUnits<<K as Key>::Unit> + DeserializeOwned,
{
    type Err = Error;

    fn from_str(json: &str) -> Result<Self, Error> {
        let mut trie = Trie::new();
        trie.from_json(json)?;
        Ok(trie)
    }
}
