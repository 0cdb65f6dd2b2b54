use std::collections::BTreeSet;

use prefix_trie::{levenshtein, StringTrie};
use quickcheck::{quickcheck, Arbitrary, Gen};

/// A short string over a four-letter alphabet, so generated keys share
/// prefixes often and fuzzy bounds actually matter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Word(String);

impl Arbitrary for Word {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 7;
        let word = (0..len)
            .map(|_| *g.choose(&['a', 'b', 'c', 'd']).unwrap())
            .collect();
        Word(word)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            self.0
                .shrink()
                .filter(|s| s.chars().all(|c| "abcd".contains(c)))
                .map(Word),
        )
    }
}

fn build(words: &[Word]) -> StringTrie {
    let mut trie = StringTrie::new();
    trie.insert_many(words.iter().map(|w| w.0.as_str()));
    trie
}

fn model(words: &[Word]) -> BTreeSet<String> {
    words
        .iter()
        .filter(|w| !w.0.is_empty())
        .map(|w| w.0.clone())
        .collect()
}

quickcheck! {
    fn prop_behaves_like_a_set(inserted: Vec<Word>, removed: Vec<Word>) -> bool {
        let mut trie = build(&inserted);
        let mut expected = model(&inserted);

        for word in &removed {
            let was_present = expected.remove(&word.0);
            if trie.remove(word.0.as_str()) != was_present {
                return false;
            }
        }

        let stored: BTreeSet<String> = trie.iter().collect();
        stored == expected && trie.len() == expected.len()
    }

    fn prop_insert_is_idempotent(words: Vec<Word>) -> bool {
        let once = build(&words);
        let mut twice = once.clone();
        let added = twice.insert_many(words.iter().map(|w| w.0.as_str()));

        added == 0 && once == twice && once.visualize() == twice.visualize()
    }

    fn prop_insertion_order_is_irrelevant(words: Vec<Word>) -> bool {
        let mut reversed = words.clone();
        reversed.reverse();

        build(&words) == build(&reversed)
    }

    fn prop_remove_restores_shape(words: Vec<Word>, extra: Word) -> bool {
        let base = build(&words);
        if extra.0.is_empty() || base.contains_key(extra.0.as_str()) {
            return true;
        }

        let mut trie = base.clone();
        trie.insert(extra.0.as_str());
        trie.remove(extra.0.as_str());

        trie == base && trie.stats() == base.stats()
    }

    fn prop_count_agrees_with_enumeration(words: Vec<Word>, prefix: Word) -> bool {
        let trie = build(&words);
        let expected = model(&words)
            .iter()
            .filter(|w| w.starts_with(prefix.0.as_str()))
            .count();

        trie.count(prefix.0.as_str()) == expected
            && trie.matches(prefix.0.as_str()).count() == expected
            && trie.contains(prefix.0.as_str()) == (expected > 0 || prefix.0.is_empty())
    }

    fn prop_fuzzy_matches_brute_force(words: Vec<Word>, query: Word, bound: u8) -> bool {
        let trie = build(&words);
        let bound = (bound % 4) as usize;
        let query_chars: Vec<char> = query.0.chars().collect();

        let mut expected: Vec<(String, usize)> = model(&words)
            .into_iter()
            .map(|w| {
                let d = levenshtein(&w.chars().collect::<Vec<_>>(), &query_chars);
                (w, d)
            })
            .filter(|(_, d)| *d <= bound)
            .collect();
        expected.sort();

        let mut found = trie.match_fuzzy(query.0.as_str(), bound as isize);
        found.sort();

        found == expected
    }

    fn prop_stats_are_consistent(words: Vec<Word>) -> bool {
        let trie = build(&words);
        let stats = trie.stats();
        let stored = model(&words);

        stats.num_strings == trie.len()
            && stats.max_depth == stored.iter().map(|w| w.chars().count()).max().unwrap_or(0)
            && stats.num_nodes >= 1 + 2 * stored.len().min(1)
    }
}

#[cfg(feature = "serde")]
quickcheck! {
    fn prop_json_round_trip(words: Vec<Word>) -> bool {
        let trie = build(&words);
        let json = match trie.to_json() {
            Ok(json) => json,
            Err(_) => return false,
        };

        let mut restored = StringTrie::new();
        restored.from_json(&json).is_ok() && restored == trie
    }
}
