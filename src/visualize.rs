//! Human-readable tree dump, for debugging.

use std::fmt::{self, Write};

use crate::node::{Edge, TrieNode};
use crate::trie::Trie;
use crate::unit::{CodeUnit, Key};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

impl<K: Key> Trie<K> {
    /// Renders the node tree, one node per line.
    ///
    /// Children are listed in edge order with the end-of-string sentinel shown
    /// as `[END]` ahead of any units.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert_many(&["a", "ab"]);
    ///
    /// assert_eq!(
    ///     trie.visualize(),
    ///     "Root\n└── a\n    ├── [END]\n    └── b\n        └── [END]\n"
    /// );
    /// ```
    pub fn visualize(&self) -> String {
        TreeDump(&self.root).to_string()
    }
}

/// Displays the subtree below a node under a `Root` header.
struct TreeDump<'a, U: CodeUnit>(&'a TrieNode<U>);

impl<'a, U: CodeUnit> fmt::Display for TreeDump<'a, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Root\n")?;

        // (node, indentation inherited from ancestors, last among its siblings)
        let mut stack: Vec<(&TrieNode<U>, String, bool)> = Vec::new();
        push_children(&mut stack, self.0, String::new());

        while let Some((node, indent, is_last)) = stack.pop() {
            f.write_str(&indent)?;
            f.write_str(if is_last { LAST_BRANCH } else { BRANCH })?;

            match node.key {
                Some(Edge::End) => f.write_str("[END]")?,
                Some(Edge::Unit(unit)) => unit.write_label(f)?,
                None => {}
            }
            f.write_char('\n')?;

            let child_indent = indent + if is_last { SPACE } else { PIPE };
            push_children(&mut stack, node, child_indent);
        }

        Ok(())
    }
}

fn push_children<'a, U: CodeUnit>(
    stack: &mut Vec<(&'a TrieNode<U>, String, bool)>,
    node: &'a TrieNode<U>,
    indent: String,
) {
    let children = node.sorted_children();
    let last = children.len().saturating_sub(1);
    // Reversed so the smallest edge is popped first
    for (i, child) in children.into_iter().enumerate().rev() {
        stack.push((child, indent.clone(), i == last));
    }
}

#[cfg(test)]
mod tests {
    use super::TreeDump;
    use crate::{ByteTrie, StringTrie};

    #[test]
    fn test_visualize_empty() {
        assert_eq!(StringTrie::new().visualize(), "Root\n");
    }

    #[test]
    fn test_visualize_siblings() {
        let mut trie = StringTrie::new();
        trie.insert_many(&["hi", "ho", "a"]);

        let expected = "\
Root
├── a
│   └── [END]
└── h
    ├── i
    │   └── [END]
    └── o
        └── [END]
";
        assert_eq!(trie.visualize(), expected);
    }

    #[test]
    fn test_visualize_is_deterministic() {
        let mut forward = StringTrie::new();
        forward.insert_many(&["car", "cat", "cart", "dog"]);

        let mut backward = StringTrie::new();
        backward.insert_many(&["dog", "cart", "cat", "car"]);

        assert_eq!(forward.visualize(), backward.visualize());
    }

    #[test]
    fn test_tree_dump_matches_visualize() {
        let mut trie = StringTrie::new();
        trie.insert_many(&["to", "tea"]);

        let dump = format!("{}", TreeDump(&trie.root));
        assert_eq!(dump, trie.visualize());
        assert!(dump.starts_with("Root\n└── t\n"));
    }

    #[test]
    fn test_visualize_byte_labels() {
        let mut trie = ByteTrie::new();
        trie.insert(&[b'a', 0x00]);

        assert_eq!(trie.visualize(), "Root\n└── a\n    └── 0x0000\n        └── [END]\n");
    }
}
