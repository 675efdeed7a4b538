// src/extract/mod.rs
// =============================================================================
// This module reads HTML so the crawler knows where to go next.
//
// Submodules:
// - html: href extraction and relative link resolution
// =============================================================================

mod html;

pub use html::{extract_hrefs, resolve_link};
