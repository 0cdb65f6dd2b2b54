//! Word completion and spelling suggestions from a small dictionary
use prefix_trie::StringTrie;

fn main() {
    let mut dictionary = StringTrie::new();
    let added = dictionary.insert_many(&[
        "race", "racecar", "raceday", "raccoon", "radar", "radish", "rain", "rainbow", "raise",
    ]);
    println!("Loaded {} words", added);

    for prefix in ["rac", "race", "rai", "ro"].iter() {
        let mut completions = Vec::new();
        dictionary.match_into(*prefix, &mut completions);
        completions.sort();
        println!(
            "{:>5} -> {} completions: {:?}",
            prefix,
            dictionary.count(*prefix),
            completions
        );
    }

    // Callback mode: stop printing after the first few results
    let mut shown = 0;
    dictionary.match_with("ra", |word| {
        if shown < 3 {
            println!("  suggestion: {}", word);
        }
        shown += 1;
    });

    println!("\nSpelling suggestions for \"racon\":");
    let mut suggestions = dictionary.match_fuzzy("racon", 2);
    suggestions.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    for (word, distance) in suggestions {
        println!("  {} ({})", word, distance);
    }

    dictionary.remove("raceday");
    println!("\nAfter removing \"raceday\":\n{}", dictionary.visualize());

    #[cfg(feature = "serde")]
    match dictionary.to_json() {
        Ok(json) => println!("As JSON: {}", json),
        Err(err) => eprintln!("Could not encode dictionary: {}", err),
    }
}
