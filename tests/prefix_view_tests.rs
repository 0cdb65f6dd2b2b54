use prefix_trie::{ByteTrie, StringTrie};
use std::collections::HashSet;

fn build(words: &[&str]) -> StringTrie {
    let mut trie = StringTrie::new();
    trie.insert_many(words);
    trie
}

fn collect_sorted<I: IntoIterator<Item = String>>(iter: I) -> Vec<String> {
    let mut keys: Vec<String> = iter.into_iter().collect();
    keys.sort();
    keys
}

#[test]
fn test_prefix_view_creation() {
    let trie = build(&["hello", "help", "world"]);

    // Create a view with a prefix that exists
    let view = trie.view_subtrie("hel");

    // Basic properties
    assert!(view.exists());
    assert_eq!(view.prefix(), &['h', 'e', 'l']);
    assert_eq!(view.trie(), &trie);
    assert_eq!(view.len(), 2);
    assert!(!view.is_empty());
}

#[test]
fn test_prefix_view_enumeration() {
    // Keys deliberately not in lexicographic order
    let trie = build(&[
        "zebra",
        "apple",
        "banana",
        "cherry",
        "date",
        "apricot",
        "blueberry",
        "blackberry",
    ]);

    let view_a = trie.view_subtrie("a");
    assert_eq!(collect_sorted(&view_a), vec!["apple", "apricot"]);

    let view_b = trie.view_subtrie("b");
    assert_eq!(
        collect_sorted(&view_b),
        vec!["banana", "blackberry", "blueberry"]
    );

    // A multi-unit prefix that includes part of some keys
    let complex = build(&["abcd", "abce", "abcf", "abcg", "abd"]);
    let view_abc = complex.view_subtrie("abc");
    assert_eq!(
        collect_sorted(&view_abc),
        vec!["abcd", "abce", "abcf", "abcg"]
    );
}

#[test]
fn test_prefix_view_nonexistent() {
    let trie = build(&["hello", "world"]);

    let view = trie.view_subtrie("xyz");

    assert!(!view.exists());
    assert_eq!(view.len(), 0);
    assert!(view.is_empty());
    assert!(!view.contains_key("hello"));
    assert!(view.iter().next().is_none());
}

#[test]
fn test_prefix_view_subtree_equality() {
    let trie1 = build(&["a", "b", "c"]);

    // Views to the same subtree should be equal
    assert_eq!(trie1.view_subtrie("a"), trie1.view_subtrie("a"));

    // Single-string subtrees hold the same suffix set: just the empty string
    assert_eq!(trie1.view_subtrie("a"), trie1.view_subtrie("b"));

    // Structurally equivalent subtrees in different tries are equal
    let trie2 = build(&["ax", "ay", "x"]);
    let trie3 = build(&["bx", "by"]);
    assert_eq!(trie2.view_subtrie("a"), trie3.view_subtrie("b"));

    // An extra suffix breaks equality
    let trie4 = build(&["a", "ax", "ay"]);
    assert_ne!(trie2.view_subtrie("a"), trie4.view_subtrie("a"));

    // Views to non-existent subtrees should be equal
    assert_eq!(trie1.view_subtrie("z"), trie2.view_subtrie("z"));
    assert_ne!(trie1.view_subtrie("z"), trie1.view_subtrie("a"));
}

#[test]
fn test_prefix_view_contains_key() {
    let trie = build(&["hello", "help", "world"]);
    let view = trie.view_subtrie("hel");

    // Should contain keys in the view
    assert!(view.contains_key("hello"));
    assert!(view.contains_key("help"));

    // Should not contain keys outside the prefix
    assert!(!view.contains_key("world"));
    assert!(!view.contains_key("he"));
}

#[test]
fn test_prefix_view_iter() {
    let trie = build(&["hello", "help", "world"]);
    let view = trie.view_subtrie("hel");

    let results: HashSet<String> = view.iter().collect();
    let expected: HashSet<String> = vec!["hello".to_string(), "help".to_string()]
        .into_iter()
        .collect();

    assert_eq!(results, expected);
}

#[test]
fn test_prefix_view_partial_prefix() {
    let trie = build(&["hello", "help"]);

    // Prefix is a partial match of "hello"
    let view = trie.view_subtrie("he");

    // The prefix exists, but is not a key itself
    assert!(view.exists());
    assert_eq!(view.len(), 2);
    assert!(!view.contains_key("he"));
    assert!(!trie.contains_key("he"));
    assert!(trie.contains("he"));

    assert!(view.contains_key("hello"));
    assert!(view.contains_key("help"));
}

#[test]
fn test_prefix_view_nested() {
    let trie = build(&["a", "ab", "abc", "abcd"]);

    let view_a = trie.view_subtrie("a");
    let view_ab = trie.view_subtrie("ab");
    let view_abc = trie.view_subtrie("abc");

    assert_eq!(view_a.len(), 4);
    assert_eq!(view_ab.len(), 3);
    assert_eq!(view_abc.len(), 2);

    assert!(view_a.contains_key("a"));
    assert!(view_a.contains_key("abc"));

    assert!(!view_ab.contains_key("a"));
    assert!(view_ab.contains_key("ab"));
    assert!(view_ab.contains_key("abc"));

    assert!(!view_abc.contains_key("ab"));
    assert!(view_abc.contains_key("abc"));
    assert!(view_abc.contains_key("abcd"));
}

#[test]
fn test_prefix_view_empty_prefix() {
    let trie = build(&["hello", "world"]);

    // Empty prefix should match the entire trie
    let view = trie.view_subtrie("");

    assert!(view.exists());
    assert_eq!(view.len(), 2);
    assert_eq!(view.len(), trie.count(""));
    assert!(view.contains_key("hello"));
    assert!(view.contains_key("world"));
}

#[test]
fn test_prefix_view_cloning() {
    let trie = build(&["hello", "help"]);

    let view = trie.view_subtrie("hel");
    let view_clone = view.clone();

    assert_eq!(view, view_clone);
    assert_eq!(view.len(), view_clone.len());
    assert!(view_clone.contains_key("hello"));
    assert_eq!(collect_sorted(&view), collect_sorted(&view_clone));
}

#[test]
fn test_count_matches_enumeration() {
    let trie = build(&["car", "card", "care", "careful", "cat", "dog"]);

    for prefix in &["", "c", "ca", "car", "care", "careful", "d", "x"] {
        assert_eq!(
            trie.count(*prefix),
            trie.matches(*prefix).count(),
            "prefix {:?}",
            prefix
        );
    }
    assert_eq!(trie.count("car"), 4);
}

#[test]
fn test_enumeration_after_mutation() {
    let mut trie = build(&["test", "testing", "tester", "toast"]);

    assert_eq!(
        collect_sorted(trie.matches("test")),
        vec!["test", "tester", "testing"]
    );

    trie.remove("tester");
    trie.insert("tested");

    assert_eq!(
        collect_sorted(trie.matches("test")),
        vec!["test", "tested", "testing"]
    );

    trie.clear();
    assert!(trie.matches("").next().is_none());
}

#[test]
fn test_byte_trie_views() {
    let mut trie = ByteTrie::new();
    trie.insert_many(&["héllo", "hélp", "hello"]);

    // "é" is two bytes, so the shared prefix is three bytes long
    let view = trie.view_subtrie("hé");
    assert_eq!(view.prefix().len(), 3);
    assert_eq!(view.len(), 2);

    let mut keys: Vec<Vec<u8>> = view.iter().collect();
    keys.sort();
    assert_eq!(keys, vec!["héllo".as_bytes().to_vec(), "hélp".as_bytes().to_vec()]);
}
