//! Prefix view into a trie and prefix enumeration.
//!
//! This module provides the `PrefixView` type, a borrowed view of the subtrie
//! under a key prefix, and `Matches`, the depth-first iterator that enumerates
//! every stored string under a prefix.

use std::fmt;
use std::marker::PhantomData;

use crate::node::{Edge, TrieNode};
use crate::trie::Trie;
use crate::unit::{AsUnits, Key};

/// A lightweight view into the subtrie defined by a key prefix.
///
/// Two views compare equal when their subtries hold the same set of suffixes,
/// regardless of which trie or prefix they come from.
///
/// # Examples
///
/// ```
/// use prefix_trie::StringTrie;
///
/// let mut trie1 = StringTrie::new();
/// trie1.insert_many(&["hello", "help"]);
///
/// let mut trie2 = StringTrie::new();
/// trie2.insert_many(&["yellow", "yelp"]);
///
/// // Both subtries hold the suffixes "lo" and "p"
/// assert_eq!(trie1.view_subtrie("hel"), trie2.view_subtrie("yel"));
///
/// let view = trie1.view_subtrie("hel");
/// assert!(view.contains_key("hello"));
/// assert!(!view.contains_key("world"));
/// ```
pub struct PrefixView<'a, K: Key> {
    /// The source trie for this view
    trie: &'a Trie<K>,

    /// The prefix defining this view, in code units
    prefix: Vec<K::Unit>,

    /// The node at the end of the prefix, if the prefix occurs in the trie
    subtrie_node: Option<&'a TrieNode<K::Unit>>,
}

/// An iterator over the stored strings under a prefix.
///
/// The traversal uses an explicit stack, so its memory is bounded by the trie's
/// depth times its branching rather than by the number of matches, and deep
/// tries cannot overflow the call stack. Each stack entry records the length
/// of the path leading to it, which lets the shared path buffer be truncated
/// correctly when the traversal jumps to a sibling subtree.
///
/// Strings are produced in no guaranteed order, each exactly once.
pub struct Matches<'a, K: Key> {
    /// Nodes still to visit, with the path length above each
    stack: Vec<(usize, &'a TrieNode<K::Unit>)>,

    /// Prefix plus the units of the branch currently being explored
    path: Vec<K::Unit>,

    _key_type: PhantomData<fn() -> K>,
}

impl<'a, K: Key> PrefixView<'a, K> {
    /// Creates a new prefix view for the given trie and prefix units.
    pub fn new(trie: &'a Trie<K>, prefix: Vec<K::Unit>) -> Self {
        let subtrie_node = trie.find_node(&prefix);

        PrefixView {
            trie,
            prefix,
            subtrie_node,
        }
    }

    /// Returns the prefix for this view, in code units.
    pub fn prefix(&self) -> &[K::Unit] {
        &self.prefix
    }

    /// Returns the underlying trie.
    pub fn trie(&self) -> &'a Trie<K> {
        self.trie
    }

    /// Returns whether the prefix occurs in the trie.
    pub fn exists(&self) -> bool {
        self.subtrie_node.is_some()
    }

    /// Returns the number of stored strings in this view.
    pub fn len(&self) -> usize {
        self.subtrie_node.map_or(0, TrieNode::count_terminals)
    }

    /// Returns whether this view holds no stored strings.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if `key` is a stored string that starts with the view's prefix.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: AsUnits<K::Unit> + ?Sized,
    {
        let units = key.as_units();
        match (self.subtrie_node, units.strip_prefix(self.prefix.as_slice())) {
            (Some(node), Some(rest)) => node.descend(rest).map_or(false, TrieNode::is_terminal),
            _ => false,
        }
    }

    /// Returns an iterator over the stored strings in this view.
    pub fn iter(&self) -> Matches<'a, K> {
        Matches::new(self.subtrie_node, self.prefix.clone())
    }
}

impl<'a, K: Key> Matches<'a, K> {
    pub(crate) fn new(start: Option<&'a TrieNode<K::Unit>>, prefix: Vec<K::Unit>) -> Self {
        let depth = prefix.len();
        let stack: Vec<_> = start
            .map(|node| node.children().map(|child| (depth, child)).collect())
            .unwrap_or_default();

        Matches {
            stack,
            path: prefix,
            _key_type: PhantomData,
        }
    }
}

impl<'a, K: Key> Iterator for Matches<'a, K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        while let Some((depth, node)) = self.stack.pop() {
            // Drop whatever the previously explored branch left past this depth
            self.path.truncate(depth);

            match node.key {
                Some(Edge::End) => return Some(K::from_units(&self.path)),
                Some(Edge::Unit(unit)) => {
                    self.path.push(unit);
                    self.stack
                        .extend(node.children().map(|child| (depth + 1, child)));
                }
                // Only the root has no key, and it is never stacked
                None => {}
            }
        }

        None
    }
}

impl<K: Key> Trie<K> {
    /// Returns an iterator over every stored string starting with `prefix`.
    ///
    /// The empty prefix matches every stored string; a prefix that does not
    /// occur yields nothing. Each call starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert_many(&["test", "testing", "tester", "toast"]);
    ///
    /// let mut found: Vec<String> = trie.matches("test").collect();
    /// found.sort();
    /// assert_eq!(found, ["test", "tester", "testing"]);
    /// ```
    pub fn matches<Q>(&self, prefix: &Q) -> Matches<'_, K>
    where
        Q: AsUnits<K::Unit> + ?Sized,
    {
        let prefix = prefix.as_units().into_owned();
        Matches::new(self.find_node(&prefix), prefix)
    }

    /// Returns an iterator over every stored string.
    pub fn iter(&self) -> Matches<'_, K> {
        Matches::new(Some(&self.root), Vec::new())
    }

    /// Passes every stored string starting with `prefix` to `callback`.
    pub fn match_with<Q, F>(&self, prefix: &Q, mut callback: F)
    where
        Q: AsUnits<K::Unit> + ?Sized,
        F: FnMut(K),
    {
        for key in self.matches(prefix) {
            callback(key);
        }
    }

    /// Appends every stored string starting with `prefix` to `out`.
    ///
    /// Existing contents of `out` are kept.
    pub fn match_into<Q, C>(&self, prefix: &Q, out: &mut C)
    where
        Q: AsUnits<K::Unit> + ?Sized,
        C: Extend<K>,
    {
        out.extend(self.matches(prefix));
    }
}

impl<'a, K: Key> IntoIterator for &'a Trie<K> {
    type Item = K;
    type IntoIter = Matches<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K: Key> IntoIterator for &PrefixView<'a, K> {
    type Item = K;
    type IntoIter = Matches<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K: Key> Clone for PrefixView<'a, K> {
    fn clone(&self) -> Self {
        PrefixView {
            trie: self.trie,
            prefix: self.prefix.clone(),
            subtrie_node: self.subtrie_node,
        }
    }
}

impl<'a, K: Key> fmt::Debug for PrefixView<'a, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixView")
            .field("prefix", &self.prefix)
            .field("exists", &self.exists())
            .field("len", &self.len())
            .finish()
    }
}

impl<'a, K: Key> PartialEq for PrefixView<'a, K> {
    fn eq(&self, other: &Self) -> bool {
        match (self.subtrie_node, other.subtrie_node) {
            (None, None) => true,
            (Some(a), Some(b)) => std::ptr::eq(a, b) || a.subtree_eq(b),
            _ => false,
        }
    }
}

impl<'a, K: Key> Eq for PrefixView<'a, K> {}
