// src/extract/html.rs
// =============================================================================
// This module pulls anchor targets out of HTML pages and turns them into
// absolute URLs.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Rust concepts:
// - Iterators: filter_map over the selected elements
// - Option<T>: For hrefs that don't resolve to anything we can follow
// =============================================================================

use anyhow::{anyhow, Result};
use scraper::{Html, Selector};
use url::Url;

// Returns the raw href value of every <a href> in the document, in document order
//
// Values are returned exactly as written in the markup (relative, absolute,
// fragments and all). Resolution happens in resolve_link.
pub fn extract_hrefs(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);

    let selector =
        Selector::parse("a[href]").map_err(|e| anyhow!("Invalid link selector: {}", e))?;

    let hrefs = document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect();

    Ok(hrefs)
}

// Resolves a link (possibly relative) against the page it was found on
//
// Examples with base = "https://example.com/page":
//   "/docs"               -> Some("https://example.com/docs")
//   "https://other.com/x" -> Some("https://other.com/x")   (passed through as written)
//   "#section"            -> None (same page)
//   "mailto:a@b.c"        -> None (not navigable)
pub fn resolve_link(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();

    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    // Absolute links are kept byte-for-byte so they match what the seed
    // looked like ("https://example.com" must not become "https://example.com/")
    if Url::parse(href).is_ok() {
        return Some(href.to_string());
    }

    base.join(href).ok().map(|url| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hrefs_in_document_order() {
        let html = r#"
            <html><body>
                <h1>Title</h1>
                <a href="/about">About</a>
                <a href="https://external.com">External</a>
                <a name="anchor-without-href">Nothing</a>
            </body></html>
        "#;
        let hrefs = extract_hrefs(html).unwrap();
        assert_eq!(hrefs, vec!["/about", "https://external.com"]);
    }

    #[test]
    fn test_extract_keeps_duplicates() {
        let html = r#"<a href="/about">About</a><a href="/about">About Again</a>"#;
        let hrefs = extract_hrefs(html).unwrap();
        assert_eq!(hrefs, vec!["/about", "/about"]);
    }

    #[test]
    fn test_page_without_links() {
        let html = "<html><body><p>Just text, no links.</p></body></html>";
        assert!(extract_hrefs(html).unwrap().is_empty());
    }

    #[test]
    fn test_resolve_relative_link() {
        let base = Url::parse("https://example.com").unwrap();
        assert_eq!(
            resolve_link(&base, "/about"),
            Some("https://example.com/about".to_string())
        );

        let base = Url::parse("https://example.com/page/").unwrap();
        assert_eq!(
            resolve_link(&base, "../other"),
            Some("https://example.com/other".to_string())
        );
    }

    #[test]
    fn test_absolute_link_passes_through_unchanged() {
        let base = Url::parse("https://example.com/page2").unwrap();
        assert_eq!(
            resolve_link(&base, "https://example.com"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_skip_anchor_and_mailto() {
        let base = Url::parse("https://example.com/page").unwrap();
        assert_eq!(resolve_link(&base, "#section"), None);
        assert_eq!(resolve_link(&base, "mailto:test@example.com"), None);
        assert_eq!(resolve_link(&base, "javascript:void(0)"), None);
        assert_eq!(resolve_link(&base, "   "), None);
    }
}
