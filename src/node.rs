//! Internal node implementation for the trie.
//!
//! This module contains the `TrieNode` structure that forms the backbone of the
//! trie. A node exclusively owns its children through `Box`, so dropping a node
//! drops its whole subtree.
//!
//! A trie may hold a single string hundreds of thousands of units long, so
//! every whole-subtree operation here (copying, comparing, dropping) walks an
//! explicit stack instead of recursing once per level.

use std::collections::HashMap;
use std::fmt;
use std::mem;

use crate::unit::CodeUnit;

/// Label of an edge between a node and one of its children.
///
/// `End` is the end-of-string sentinel. It is a separate variant rather than a
/// reserved unit value, so it can never collide with real input. A node holds
/// a stored string exactly when it has a child keyed by `End`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Edge<U> {
    /// End-of-string sentinel.
    End,
    /// A regular code unit.
    Unit(U),
}

impl<U> Edge<U> {
    /// Returns `true` for the end-of-string sentinel.
    pub fn is_end(&self) -> bool {
        matches!(self, Edge::End)
    }
}

/// A single node of the trie.
///
/// Each node records the edge that was consumed to reach it from its parent
/// and a map of children keyed by the next edge. The root is reached through
/// no edge, so its key is `None`.
pub struct TrieNode<U: CodeUnit> {
    /// The edge consumed to reach this node (the sentinel for terminal markers)
    pub(crate) key: Option<Edge<U>>,

    /// Child nodes indexed by their edge label
    pub(crate) children: HashMap<Edge<U>, Box<TrieNode<U>>>,
}

impl<U: CodeUnit> TrieNode<U> {
    /// Creates a childless node reached through `key`.
    pub(crate) fn new(key: Edge<U>) -> Self {
        TrieNode {
            key: Some(key),
            children: HashMap::new(),
        }
    }

    /// Creates an empty root node.
    pub(crate) fn root() -> Self {
        TrieNode {
            key: None,
            children: HashMap::new(),
        }
    }

    /// Returns the edge consumed to reach this node, or `None` for the root.
    pub fn key(&self) -> Option<Edge<U>> {
        self.key
    }

    /// Returns `true` if this node is an end-of-string marker.
    pub fn is_sentinel(&self) -> bool {
        self.key == Some(Edge::End)
    }

    /// Returns whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns whether the path to this node is a stored string.
    pub fn is_terminal(&self) -> bool {
        self.children.contains_key(&Edge::End)
    }

    /// Returns the child reached by consuming `unit`, if any.
    pub fn child(&self, unit: U) -> Option<&TrieNode<U>> {
        self.children.get(&Edge::Unit(unit)).map(|child| &**child)
    }

    /// Iterates over the children in unspecified order.
    pub fn children(&self) -> impl Iterator<Item = &TrieNode<U>> {
        self.children.values().map(|child| &**child)
    }

    /// Returns the children ordered by edge, sentinel first.
    pub(crate) fn sorted_children(&self) -> Vec<&TrieNode<U>> {
        let mut children: Vec<&TrieNode<U>> = self.children().collect();
        children.sort_by_key(|child| child.key);
        children
    }

    /// Walks down from this node along `units`.
    pub(crate) fn descend(&self, units: &[U]) -> Option<&TrieNode<U>> {
        units.iter().try_fold(self, |node, &unit| node.child(unit))
    }

    /// Counts the stored strings in this subtree.
    ///
    /// Sentinels contribute one each and are not descended into.
    pub(crate) fn count_terminals(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            for child in node.children() {
                if child.is_sentinel() {
                    count += 1;
                } else {
                    stack.push(child);
                }
            }
        }

        count
    }

    /// Returns whether both nodes have identical subtrees below them.
    ///
    /// The keys of `self` and `other` themselves are not compared, so this
    /// holds for two nodes that end the same set of suffixes.
    pub(crate) fn subtree_eq(&self, other: &TrieNode<U>) -> bool {
        let mut stack = vec![(self, other)];

        while let Some((a, b)) = stack.pop() {
            if a.children.len() != b.children.len() {
                return false;
            }
            for (edge, a_child) in &a.children {
                match b.children.get(edge) {
                    Some(b_child) => stack.push((&**a_child, &**b_child)),
                    None => return false,
                }
            }
        }

        true
    }
}

/// A node whose children are being copied.
struct CloneFrame<'a, U: CodeUnit> {
    source: &'a TrieNode<U>,
    /// Children of `source` not yet visited
    pending: Vec<&'a TrieNode<U>>,
    /// Finished copies of the visited children
    copied: HashMap<Edge<U>, Box<TrieNode<U>>>,
}

impl<'a, U: CodeUnit> CloneFrame<'a, U> {
    fn new(source: &'a TrieNode<U>) -> Self {
        CloneFrame {
            source,
            pending: source.children().collect(),
            copied: HashMap::with_capacity(source.children.len()),
        }
    }
}

// Copies bottom-up: a node is assembled once all of its children are.
impl<U: CodeUnit> Clone for TrieNode<U> {
    fn clone(&self) -> Self {
        let mut ancestors: Vec<CloneFrame<'_, U>> = Vec::new();
        let mut current = CloneFrame::new(self);

        loop {
            if let Some(child) = current.pending.pop() {
                ancestors.push(mem::replace(&mut current, CloneFrame::new(child)));
                continue;
            }

            let node = TrieNode {
                key: current.source.key,
                children: current.copied,
            };
            match ancestors.pop() {
                Some(mut parent) => {
                    if let Some(edge) = node.key {
                        parent.copied.insert(edge, Box::new(node));
                    }
                    current = parent;
                }
                None => return node,
            }
        }
    }
}

impl<U: CodeUnit> PartialEq for TrieNode<U> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.subtree_eq(other)
    }
}

impl<U: CodeUnit> Eq for TrieNode<U> {}

// Shallow on purpose: lists child edges rather than child nodes.
impl<U: CodeUnit> fmt::Debug for TrieNode<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut edges: Vec<&Edge<U>> = self.children.keys().collect();
        edges.sort();

        f.debug_struct("TrieNode")
            .field("key", &self.key)
            .field("children", &edges)
            .finish()
    }
}

// Unlinks the subtree onto a heap stack so that dropping a long chain does not
// recurse once per node.
impl<U: CodeUnit> Drop for TrieNode<U> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TrieNode<U>>> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}
