// src/crawl/mod.rs
// =============================================================================
// This module handles crawling a website and searching what was found.
//
// Features:
// - Depth-first crawling starting from a seed URL
// - Same-host restriction (never wanders onto other sites)
// - Each URL fetched at most once per session, even with cyclic links
// - Keyword search over the fetched pages
//
// Submodules:
// - crawler: The Crawler struct (crawl, search, print_results, reset)
// - index: PageIndex, the ordered URL -> text store
// - report: Plain text and JSON rendering of search results
// =============================================================================

mod crawler;
mod index;
mod report;

pub use crawler::Crawler;
pub use report::{write_json, SearchReport};
