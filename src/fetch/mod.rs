// src/fetch/mod.rs
// =============================================================================
// This module is the crawler's view of the network.
//
// Submodules:
// - http: The Fetcher trait and its reqwest-backed implementation
// - error: FetchError, the tagged list of ways a fetch can fail
// =============================================================================

mod error;
mod http;

pub use error::FetchError;
pub use http::{Fetcher, HttpFetcher, Page};
