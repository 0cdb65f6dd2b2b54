//! # Prefix Trie
//!
//! An in-memory set of strings stored as a character trie, built for
//! autocomplete-style workloads.
//!
//! Each node holds one code unit, and a stored string is marked by an
//! end-of-string sentinel child under its last unit. Common prefixes are stored
//! once, so both prefix enumeration and approximate search touch only the part
//! of the tree that can still match.
//!
//! ## Features
//!
//! - **Set semantics**: Insert and remove strings, with an O(1) size count
//! - **Prefix queries**: Test, count and enumerate every string under a prefix
//! - **Fuzzy search**: Find all strings within a Levenshtein distance of a query
//! - **Diagnostics**: Structural statistics and a box-drawing tree dump
//! - **Serialization**: Serde support and an ASCII JSON string-array format
//!   (behind the default `serde` feature)
//!
//! The code unit is generic: [`StringTrie`] works on `char`s, [`ByteTrie`] on
//! bytes and [`WideTrie`] on UTF-16 units.
//!
//! ## Example
//!
//! ```rust
//! use prefix_trie::StringTrie;
//!
//! let mut trie = StringTrie::new();
//! trie.insert_many(&["race", "racecar", "raceday", "raccoon"]);
//!
//! // Prefix queries
//! assert!(trie.contains("rac"));
//! assert_eq!(trie.count("race"), 3);
//!
//! let mut completions: Vec<String> = trie.matches("race").collect();
//! completions.sort();
//! assert_eq!(completions, vec!["race", "racecar", "raceday"]);
//!
//! // Approximate search
//! assert_eq!(trie.match_fuzzy("rice", 1), vec![("race".to_string(), 1)]);
//! ```

mod error;
mod fuzzy;
pub mod node;
mod prefix_view;
#[cfg(feature = "serde")]
mod serialize;
mod stats;
mod trie;
pub mod unit;
mod util;
mod visualize;

// Re-export public types
pub use crate::error::Error;
pub use crate::fuzzy::FuzzyMatches;
pub use crate::node::{Edge, TrieNode};
pub use crate::prefix_view::{Matches, PrefixView};
#[cfg(feature = "serde")]
pub use crate::serialize::TrieSeed;
pub use crate::stats::TrieStats;
pub use crate::trie::Trie;
pub use crate::unit::{AsUnits, CodeUnit, Key};
pub use crate::util::levenshtein;

/// A trie over Unicode scalar values, storing `String`s.
pub type StringTrie = Trie<String>;

/// A trie over raw bytes. `&str` keys are inserted as their UTF-8 encoding.
pub type ByteTrie = Trie<Vec<u8>>;

/// A trie over UTF-16 code units. `&str` keys are inserted as their UTF-16 encoding.
pub type WideTrie = Trie<Vec<u16>>;
