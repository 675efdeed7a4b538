// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, filtered by RUST_LOG)
// 3. Crawl the site starting at the seed URL
// 4. Search the crawled pages for each keyword and print the results
// 5. Exit with proper code (0 = success, 2 = error)
//
// Rust concepts used:
// - async/await: reqwest is an async HTTP client, so main runs on tokio
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - crawler, page index and result rendering
mod extract; // src/extract/ - link extraction from HTML
mod fetch; // src/fetch/ - fetching pages over HTTP

use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use crawl::{Crawler, SearchReport};
use fetch::HttpFetcher;

use anyhow::Result;
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // An error got past the crawler's own handling
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging();

    let fetcher = HttpFetcher::new()?;
    let mut crawler = Crawler::new(fetcher).with_timeout(Duration::from_secs(cli.timeout));

    crawler.crawl(&cli.seed_url).await?;

    if cli.keywords.is_empty() {
        println!(
            "Indexed {} page(s), visited {} URL(s)",
            crawler.index().len(),
            crawler.visited().len()
        );
        return Ok(());
    }

    for keyword in &cli.keywords {
        let results = crawler.search(keyword);

        if cli.json {
            let report = SearchReport {
                keyword,
                results: &results,
            };
            crawl::write_json(&mut io::stdout().lock(), &report)?;
        } else {
            crawler.print_results(&results)?;
        }
    }

    Ok(())
}

// Logs go to stderr so they never mix with the results on stdout
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}
