//! Prefix routing over URL paths with url::Url
use prefix_trie::ByteTrie;
use url::Url;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Store the full URLs as byte strings
    let mut routes = ByteTrie::new();

    let pages = [
        "https://example.com/",
        "https://example.com/about",
        "https://example.com/contact",
        "https://example.com/blog",
        "https://example.com/blog/first-post",
        "https://example.com/blog/second-post",
    ];
    for page in pages.iter() {
        let url = Url::parse(page)?;
        routes.insert(url.as_str());
    }

    // Exact lookups
    let blog = Url::parse("https://example.com/blog")?;
    let unknown = Url::parse("https://example.com/unknown")?;
    println!("URL existence check:");
    println!("  {} exists: {}", blog, routes.contains_key(blog.as_str()));
    println!("  {} exists: {}", unknown, routes.contains_key(unknown.as_str()));

    // Everything under the blog section
    let section = blog.join("blog/")?;
    println!("\nPages under {}:", section);
    let mut posts: Vec<String> = routes
        .matches(section.as_str())
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .collect();
    posts.sort();
    for post in &posts {
        println!("  {}", post);
    }

    // Suggest a route for a mistyped URL
    let typo = Url::parse("https://example.com/abuot")?;
    println!("\nDid you mean, for {}:", typo);
    for (bytes, distance) in routes.match_fuzzy(typo.as_str(), 2) {
        println!("  {} (distance {})", String::from_utf8_lossy(&bytes), distance);
    }

    println!("\n{}", routes.stats());

    Ok(())
}
