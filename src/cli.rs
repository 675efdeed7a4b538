// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "page-indexer",
    version,
    about = "Crawl a website and search the pages it links to",
    long_about = "page-indexer starts at a seed URL, follows every link on the same host, \
                  keeps the text of each page in memory and then searches it for keywords."
)]
pub struct Cli {
    /// URL to start crawling from (e.g., https://example.com)
    ///
    /// Only links on this URL's host are followed
    pub seed_url: String,

    /// Keywords to search for once the crawl is done
    ///
    /// Matching is case-sensitive. Leave empty to only crawl.
    pub keywords: Vec<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 5)]
    pub timeout: u64,

    /// Output search results in JSON format instead of a list
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_and_keywords() {
        let cli = Cli::parse_from(["page-indexer", "https://example.com", "rust", "crawler"]);
        assert_eq!(cli.seed_url, "https://example.com");
        assert_eq!(cli.keywords, vec!["rust", "crawler"]);
        assert_eq!(cli.timeout, 5);
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "page-indexer",
            "https://example.com",
            "--timeout",
            "10",
            "--json",
        ]);
        assert!(cli.keywords.is_empty());
        assert_eq!(cli.timeout, 10);
        assert!(cli.json);
    }
}
