//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for
//! inserting, removing and looking up strings. Enumeration lives in
//! `prefix_view`, approximate search in `fuzzy`.

use std::collections::hash_map::Entry;
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;

use log::{debug, trace};

use crate::node::{Edge, TrieNode};
use crate::prefix_view::PrefixView;
use crate::unit::{AsUnits, Key};

/// An in-memory string trie.
///
/// Strings are sequences of code units (`K::Unit`). Every stored string shares
/// the path of its prefix with every other stored string, and a stored string
/// is marked by a sentinel child under the node for its last unit.
///
/// The empty string is never stored: inserting or removing it is a no-op, and
/// it is always "contained" as a prefix.
///
/// # Examples
///
/// ```
/// use prefix_trie::StringTrie;
///
/// let mut trie = StringTrie::new();
/// trie.insert("race");
/// trie.insert("racecar");
///
/// assert!(trie.contains("racec"));
/// assert!(trie.contains_key("race"));
/// assert!(!trie.contains_key("racec"));
/// assert_eq!(trie.count("race"), 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Trie<K: Key> {
    /// The root node of the trie
    pub(crate) root: TrieNode<K::Unit>,

    /// The number of strings stored in the trie
    size: usize,

    _key_type: PhantomData<fn() -> K>,
}

impl<K: Key> Trie<K> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::StringTrie;
    ///
    /// let trie = StringTrie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            root: TrieNode::root(),
            size: 0,
            _key_type: PhantomData,
        }
    }

    /// Returns the number of strings stored in the trie.
    ///
    /// Always equal to `count("")`.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie stores no strings.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every stored string, replacing the root with a fresh node.
    pub fn clear(&mut self) {
        debug!("clearing trie holding {} strings", self.size);
        self.root = TrieNode::root();
        self.size = 0;
    }

    /// Returns the root node, for read-only traversal.
    pub fn root(&self) -> &TrieNode<K::Unit> {
        &self.root
    }

    /// Inserts a string, returning `true` if it was not already stored.
    ///
    /// Existing nodes along the shared prefix are reused and new nodes are
    /// created only for the units past the first divergence. Inserting the
    /// same string twice leaves the trie unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// assert!(trie.insert("hello"));
    /// assert!(!trie.insert("hello"));
    /// assert!(!trie.insert(""));
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn insert<Q>(&mut self, key: &Q) -> bool
    where
        Q: AsUnits<K::Unit> + ?Sized,
    {
        let units = key.as_units();
        if units.is_empty() {
            return false;
        }

        let mut node = &mut self.root;
        for &unit in units.iter() {
            node = &mut **node
                .children
                .entry(Edge::Unit(unit))
                .or_insert_with(|| Box::new(TrieNode::new(Edge::Unit(unit))));
        }

        match node.children.entry(Edge::End) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Box::new(TrieNode::new(Edge::End)));
                self.size += 1;
                true
            }
        }
    }

    /// Inserts every string from `keys`, returning how many were new.
    pub fn insert_many<I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator,
        I::Item: AsUnits<K::Unit>,
    {
        keys.into_iter().filter(|key| self.insert(key)).count()
    }

    /// Removes a stored string, returning `true` if it was present.
    ///
    /// Nothing happens when the string is empty, absent, or only a prefix of
    /// other stored strings. Otherwise the sentinel is detached and every node
    /// left without children is pruned, up to the first ancestor still in use.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("race");
    /// trie.insert("racecar");
    ///
    /// assert!(trie.remove("race"));
    /// assert!(!trie.contains_key("race"));
    /// assert!(trie.contains("race"));
    /// assert!(trie.contains_key("racecar"));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        Q: AsUnits<K::Unit> + ?Sized,
    {
        let units = key.as_units();
        if units.is_empty() {
            return false;
        }

        // fanout[d] is the child count of the node at depth d on the path.
        let mut fanout = Vec::with_capacity(units.len() + 1);
        let mut node = &self.root;
        fanout.push(node.children.len());
        for &unit in units.iter() {
            match node.child(unit) {
                Some(child) => node = child,
                None => return false,
            }
            fanout.push(node.children.len());
        }
        if !node.is_terminal() {
            return false;
        }

        // Walk the recorded path backward. A node whose only child is the one
        // being detached becomes childless and goes with it; the root stays.
        let mut cut = units.len();
        while cut > 0 && fanout[cut] == 1 {
            cut -= 1;
        }
        let edge = if cut == units.len() {
            Edge::End
        } else {
            Edge::Unit(units[cut])
        };

        let detached = match self.descend_mut(&units[..cut]) {
            Some(parent) => parent.children.remove(&edge).is_some(),
            None => false,
        };
        if detached {
            self.size -= 1;
            trace!(
                "removed string of {} units, pruned {} nodes",
                units.len(),
                units.len() - cut
            );
        }
        detached
    }

    /// Returns `true` if `prefix` is a stored string or a prefix of one.
    ///
    /// This answers "does this path occur in the trie"; use
    /// [`contains_key`](Trie::contains_key) for exact membership. The empty
    /// prefix is always contained.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("racecar");
    ///
    /// assert!(trie.contains(""));
    /// assert!(trie.contains("race"));
    /// assert!(!trie.contains("racet"));
    /// ```
    pub fn contains<Q>(&self, prefix: &Q) -> bool
    where
        Q: AsUnits<K::Unit> + ?Sized,
    {
        self.find_node(&prefix.as_units()).is_some()
    }

    /// Returns `true` if `key` itself is a stored string.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: AsUnits<K::Unit> + ?Sized,
    {
        self.find_node(&key.as_units())
            .map_or(false, TrieNode::is_terminal)
    }

    /// Returns the number of stored strings starting with `prefix`.
    ///
    /// The empty prefix matches every stored string; a prefix with no path in
    /// the trie counts zero.
    pub fn count<Q>(&self, prefix: &Q) -> usize
    where
        Q: AsUnits<K::Unit> + ?Sized,
    {
        self.find_node(&prefix.as_units())
            .map_or(0, TrieNode::count_terminals)
    }

    /// Creates a view of the subtrie under the given prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::StringTrie;
    ///
    /// let trie: StringTrie = ["hello", "help", "world"].iter().map(|s| s.to_string()).collect();
    ///
    /// let view = trie.view_subtrie("hel");
    /// assert_eq!(view.len(), 2);
    /// assert!(view.contains_key("help"));
    /// assert!(!view.contains_key("world"));
    /// ```
    pub fn view_subtrie<Q>(&self, prefix: &Q) -> PrefixView<'_, K>
    where
        Q: AsUnits<K::Unit> + ?Sized,
    {
        PrefixView::new(self, prefix.as_units().into_owned())
    }

    /// Finds the node reached by consuming `units` from the root.
    pub(crate) fn find_node(&self, units: &[K::Unit]) -> Option<&TrieNode<K::Unit>> {
        self.root.descend(units)
    }

    fn descend_mut(&mut self, units: &[K::Unit]) -> Option<&mut TrieNode<K::Unit>> {
        let mut node = &mut self.root;
        for &unit in units {
            node = &mut **node.children.get_mut(&Edge::Unit(unit))?;
        }
        Some(node)
    }
}

/// Number of stored strings shown by `Debug`.
const DEBUG_SAMPLE: usize = 8;

impl<K: Key + fmt::Debug> fmt::Debug for Trie<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sample: Vec<K> = self.iter().take(DEBUG_SAMPLE).collect();
        f.debug_struct("Trie")
            .field("len", &self.size)
            .field("sample", &sample)
            .finish()
    }
}

impl<K: Key> Default for Trie<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FromIterator<K> for Trie<K>
where
    K: Key + AsUnits<<K as Key>::Unit>,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<K> Extend<K> for Trie<K>
where
    K: Key + AsUnits<<K as Key>::Unit>,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(&key);
        }
    }
}
