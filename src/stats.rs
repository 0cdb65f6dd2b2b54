//! Structural statistics for a trie.

use std::fmt;
use std::mem;

use crate::node::{Edge, TrieNode};
use crate::trie::Trie;
use crate::unit::Key;

/// A summary of a trie's shape, recomputed on every call to [`Trie::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrieStats {
    /// Number of stored strings
    pub num_strings: usize,
    /// Number of nodes, counting the root and every end-of-string sentinel
    pub num_nodes: usize,
    /// Length in units of the longest stored string
    pub max_depth: usize,
    /// Mean length in units of the stored strings
    pub avg_depth: f64,
    /// Mean child count over nodes that have children, sentinels excluded
    pub avg_branching_factor: f64,
    /// Rough estimate of the heap and inline memory held by the nodes
    pub memory_bytes: usize,
}

impl fmt::Display for TrieStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "strings:          {}", self.num_strings)?;
        writeln!(f, "nodes:            {}", self.num_nodes)?;
        writeln!(f, "max depth:        {}", self.max_depth)?;
        writeln!(f, "avg depth:        {:.2}", self.avg_depth)?;
        writeln!(f, "avg branching:    {:.2}", self.avg_branching_factor)?;
        write!(f, "memory (approx.): {} bytes", self.memory_bytes)
    }
}

impl<K: Key> Trie<K> {
    /// Computes node, depth and branching statistics in one full pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert_many(&["race", "racecar"]);
    ///
    /// let stats = trie.stats();
    /// assert_eq!(stats.num_strings, 2);
    /// assert_eq!(stats.max_depth, 7);
    /// ```
    pub fn stats(&self) -> TrieStats {
        let mut stats = TrieStats::default();
        let mut total_depth = 0;
        let mut branching_nodes = 0;
        let mut total_children = 0;

        // (node, units consumed to reach it)
        let mut stack: Vec<(&TrieNode<K::Unit>, usize)> = vec![(&self.root, 0)];

        while let Some((node, depth)) = stack.pop() {
            stats.num_nodes += 1;

            if node.is_sentinel() {
                stats.num_strings += 1;
                total_depth += depth;
                stats.max_depth = stats.max_depth.max(depth);
                continue;
            }

            if !node.is_leaf() {
                branching_nodes += 1;
                total_children += node.children.len();
            }
            for child in node.children() {
                let child_depth = if child.is_sentinel() { depth } else { depth + 1 };
                stack.push((child, child_depth));
            }
        }

        if stats.num_strings > 0 {
            stats.avg_depth = total_depth as f64 / stats.num_strings as f64;
        }
        if branching_nodes > 0 {
            stats.avg_branching_factor = total_children as f64 / branching_nodes as f64;
        }

        let entry_size = mem::size_of::<Edge<K::Unit>>() + mem::size_of::<Box<TrieNode<K::Unit>>>();
        stats.memory_bytes =
            stats.num_nodes * mem::size_of::<TrieNode<K::Unit>>() + total_children * entry_size;

        stats
    }
}
