// src/crawl/crawler.rs
// =============================================================================
// This module implements the crawler itself.
//
// How it works:
// 1. Put the seed URL on a stack
// 2. Pop a URL; skip it if we've seen it, otherwise mark it visited
// 3. Fetch the page and store its text in the index
// 4. Resolve its links and push the ones on the seed's host
// 5. Repeat until the stack is empty
//
// Failed fetches (network error, bad URL, timeout) print one line and the
// crawl moves on. Any other error stops the crawl and is returned.
//
// Rust concepts:
// - Generics: Crawler<F> works with any Fetcher
// - HashSet: To track visited URLs (O(1) lookup)
// - Vec as a stack: push()/pop() give us depth-first order
// =============================================================================

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use super::index::PageIndex;
use super::report::write_results;
use crate::extract::{extract_hrefs, resolve_link};
use crate::fetch::{Fetcher, HttpFetcher, Page};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Crawler<F: Fetcher = HttpFetcher> {
    fetcher: F,
    timeout: Duration,
    visited: HashSet<String>,
    index: PageIndex,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            timeout: DEFAULT_TIMEOUT,
            visited: HashSet::new(),
            index: PageIndex::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Every URL a fetch was attempted for, successful or not.
    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    pub fn index(&self) -> &PageIndex {
        &self.index
    }

    // Starts a fresh session. Without this, repeated crawl() calls share
    // one visited set and one index.
    pub fn reset(&mut self) {
        self.visited.clear();
        self.index.clear();
    }

    // Crawls from `url`, printing failed fetches to stdout
    pub async fn crawl(&mut self, url: &str) -> Result<()> {
        let mut stdout = io::stdout();
        self.crawl_with_output(url, &mut stdout).await
    }

    // Same as crawl(), but failed fetches are reported to `out`
    //
    // The URL is not validated here. A malformed seed is handed to the
    // fetcher, which reports it like any other failed fetch.
    pub async fn crawl_with_output<W: Write>(&mut self, url: &str, out: &mut W) -> Result<()> {
        if self.visited.contains(url) {
            debug!(url, "already visited");
            return Ok(());
        }

        // Links are followed only if they live on the seed's host
        let seed_host = Url::parse(url)
            .ok()
            .and_then(|seed| seed.host_str().map(str::to_string));

        info!(seed = url, "starting crawl");
        let pages_before = self.index.len();

        let mut stack = vec![url.to_string()];

        while let Some(current) = stack.pop() {
            // insert() returns false if the URL was already there
            if !self.visited.insert(current.clone()) {
                continue;
            }

            debug!(url = %current, "fetching");

            let Page { status, body } = match self.fetcher.fetch(&current, self.timeout).await {
                Ok(page) => page,
                Err(e) if e.is_recoverable() => {
                    writeln!(out, "Error crawling {}: {}", current, e)?;
                    continue;
                }
                Err(e) => {
                    return Err(anyhow::Error::new(e))
                        .with_context(|| format!("Aborting crawl at {}", current));
                }
            };

            debug!(url = %current, status, bytes = body.len(), "fetched");

            let hrefs = extract_hrefs(&body);
            self.index.insert(current.clone(), body);
            let hrefs =
                hrefs.with_context(|| format!("Failed to read links from {}", current))?;

            let base = Url::parse(&current)
                .with_context(|| format!("Fetched page has an unparseable URL: {}", current))?;

            let mut links = Vec::new();
            for href in &hrefs {
                let Some(link) = resolve_link(&base, href) else {
                    continue;
                };

                if !is_same_host(&link, seed_host.as_deref()) {
                    debug!(link = %link, "skipping external link");
                    continue;
                }

                if !self.visited.contains(&link) {
                    links.push(link);
                }
            }

            // Reversed so the first link on the page is popped first
            stack.extend(links.into_iter().rev());
        }

        info!(
            seed = url,
            indexed = self.index.len() - pages_before,
            visited = self.visited.len(),
            "crawl finished"
        );

        Ok(())
    }

    /// URLs of indexed pages whose text contains `keyword`, in crawl order.
    pub fn search(&self, keyword: &str) -> Vec<String> {
        self.index.search(keyword)
    }

    pub fn print_results(&self, results: &[String]) -> Result<()> {
        let mut stdout = io::stdout().lock();
        write_results(&mut stdout, results)?;
        Ok(())
    }
}

// Compares the host of `link` to the seed's host
//
// A seed without a host (or one that didn't parse) has no same-host links.
fn is_same_host(link: &str, seed_host: Option<&str>) -> bool {
    let Some(seed_host) = seed_host else {
        return false;
    };

    match Url::parse(link) {
        Ok(parsed) => parsed.host_str() == Some(seed_host),
        Err(_) => false,
    }
}
