//! Approximate (edit-distance bounded) search over a trie.
//!
//! The search walks the trie depth first and carries one row of the
//! Levenshtein table per visited node: `row[i]` is the distance between the
//! first `i` units of the query and the path from the root to that node. A
//! child's row is computed from its parent's row in `O(query length)`, so every
//! shared prefix is scored once for all strings below it.
//!
//! A subtree is abandoned as soon as every entry of its row exceeds the bound,
//! since extending the path can never lower the minimum of the row.

use std::marker::PhantomData;
use std::rc::Rc;

use log::trace;

use crate::node::{Edge, TrieNode};
use crate::trie::Trie;
use crate::unit::{AsUnits, CodeUnit, Key};
use crate::util::next_row;

/// A pending node together with the row of its parent.
struct Frame<'a, U: CodeUnit> {
    node: &'a TrieNode<U>,
    /// Path length above `node`
    depth: usize,
    parent_row: Rc<[usize]>,
}

/// An iterator over the stored strings within an edit distance of a query.
///
/// Yields `(string, distance)` pairs in no guaranteed order, where `distance`
/// is the exact Levenshtein distance to the query.
pub struct FuzzyMatches<'a, K: Key> {
    query: Vec<K::Unit>,
    max_distance: usize,
    stack: Vec<Frame<'a, K::Unit>>,
    path: Vec<K::Unit>,
    visited: usize,
    pruned: usize,
    _key_type: PhantomData<fn() -> K>,
}

impl<'a, K: Key> FuzzyMatches<'a, K> {
    pub(crate) fn new(root: &'a TrieNode<K::Unit>, query: Vec<K::Unit>, max_distance: isize) -> Self {
        let mut stack = Vec::new();

        // A negative bound cannot be met by any string
        let max_distance = if max_distance < 0 {
            0
        } else {
            let base: Rc<[usize]> = (0..=query.len()).collect();
            stack.extend(root.children().map(|node| Frame {
                node,
                depth: 0,
                parent_row: Rc::clone(&base),
            }));
            max_distance as usize
        };

        FuzzyMatches {
            query,
            max_distance,
            stack,
            path: Vec::new(),
            visited: 0,
            pruned: 0,
            _key_type: PhantomData,
        }
    }
}

impl<'a, K: Key> Iterator for FuzzyMatches<'a, K> {
    type Item = (K, usize);

    fn next(&mut self) -> Option<(K, usize)> {
        while let Some(Frame {
            node,
            depth,
            parent_row,
        }) = self.stack.pop()
        {
            self.visited += 1;

            match node.key {
                Some(Edge::End) => {
                    let distance = parent_row[self.query.len()];
                    if distance <= self.max_distance {
                        return Some((K::from_units(&self.path[..depth]), distance));
                    }
                }
                Some(Edge::Unit(unit)) => {
                    let row = next_row(&parent_row, &unit, &self.query);
                    if row.iter().all(|&d| d > self.max_distance) {
                        self.pruned += 1;
                        continue;
                    }

                    self.path.truncate(depth);
                    self.path.push(unit);

                    let row: Rc<[usize]> = row.into();
                    self.stack.extend(node.children().map(|child| Frame {
                        node: child,
                        depth: depth + 1,
                        parent_row: Rc::clone(&row),
                    }));
                }
                None => {}
            }
        }

        if self.visited > 0 {
            trace!(
                "fuzzy search within {} visited {} nodes, pruned {} subtrees",
                self.max_distance,
                self.visited,
                self.pruned
            );
            self.visited = 0;
        }
        None
    }
}

impl<K: Key> Trie<K> {
    /// Returns every stored string within `max_distance` edits of `query`,
    /// paired with its exact Levenshtein distance.
    ///
    /// Insertions, deletions and substitutions each cost one. A negative bound
    /// yields an empty result. The order of the results is unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert_many(&["hello", "help", "world"]);
    ///
    /// let mut found = trie.match_fuzzy("hallo", 1);
    /// assert_eq!(found, vec![("hello".to_string(), 1)]);
    ///
    /// found = trie.match_fuzzy("help", 2);
    /// found.sort();
    /// assert_eq!(found, vec![("hello".to_string(), 2), ("help".to_string(), 0)]);
    ///
    /// assert!(trie.match_fuzzy("hello", -1).is_empty());
    /// ```
    pub fn match_fuzzy<Q>(&self, query: &Q, max_distance: isize) -> Vec<(K, usize)>
    where
        Q: AsUnits<K::Unit> + ?Sized,
    {
        self.fuzzy_matches(query, max_distance).collect()
    }

    /// Lazily yields the results of [`match_fuzzy`](Trie::match_fuzzy).
    ///
    /// Callers needing a time bound can stop consuming the iterator at any
    /// point; no work is done ahead of the next result.
    pub fn fuzzy_matches<Q>(&self, query: &Q, max_distance: isize) -> FuzzyMatches<'_, K>
    where
        Q: AsUnits<K::Unit> + ?Sized,
    {
        FuzzyMatches::new(&self.root, query.as_units().into_owned(), max_distance)
    }
}
