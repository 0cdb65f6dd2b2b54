/// Computes the edit-distance row for a path extended by `unit`.
///
/// `prev[i]` is the distance between the first `i` units of `query` and the
/// path before `unit`; the result holds the same for the path after it.
pub(crate) fn next_row<U: PartialEq>(prev: &[usize], unit: &U, query: &[U]) -> Vec<usize> {
    let mut row = Vec::with_capacity(prev.len());
    row.push(prev[0] + 1);

    for (i, q) in query.iter().enumerate() {
        let insertion = row[i] + 1;
        let deletion = prev[i + 1] + 1;
        let substitution = prev[i] + usize::from(q != unit);
        row.push(insertion.min(deletion).min(substitution));
    }

    row
}

/// Returns the Levenshtein distance between two unit sequences.
///
/// Insertions, deletions and substitutions each cost one.
///
/// ```
/// use prefix_trie::levenshtein;
///
/// let kitten: Vec<char> = "kitten".chars().collect();
/// let sitting: Vec<char> = "sitting".chars().collect();
/// assert_eq!(levenshtein(&kitten, &sitting), 3);
/// ```
pub fn levenshtein<U: PartialEq>(a: &[U], b: &[U]) -> usize {
    let base: Vec<usize> = (0..=b.len()).collect();
    let last = a.iter().fold(base, |row, unit| next_row(&row, unit, b));
    last[b.len()]
}
