// src/crawl/report.rs
// =============================================================================
// Rendering search results.
//
// Two formats:
// - Plain text for people ("Search results:" + one "- <url>" per line)
// - JSON for scripts (--json)
// =============================================================================

use serde::Serialize;
use std::io::{self, Write};

// One keyword and the pages that matched it, as printed by --json
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport<'a> {
    pub keyword: &'a str,
    pub results: &'a [String],
}

// Writes the human-readable listing
//
// Takes any writer so tests can capture the output in a Vec<u8>.
pub fn write_results<W: Write>(out: &mut W, results: &[String]) -> io::Result<()> {
    if results.is_empty() {
        writeln!(out, "No results found.")?;
        return Ok(());
    }

    writeln!(out, "Search results:")?;
    for url in results {
        writeln!(out, "- {}", url)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, report: &SearchReport<'_>) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(results: &[String]) -> String {
        let mut out = Vec::new();
        write_results(&mut out, results).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_results_listing() {
        let output = render(&["http://test.com".to_string()]);
        assert!(output.contains("Search results:"));
        assert!(output.contains("- http://test.com"));
    }

    #[test]
    fn test_no_results() {
        let output = render(&[]);
        assert_eq!(output, "No results found.\n");
    }

    #[test]
    fn test_json_report() {
        let results = vec!["https://example.com/about".to_string()];
        let report = SearchReport {
            keyword: "about",
            results: &results,
        };

        let mut out = Vec::new();
        write_json(&mut out, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["keyword"], "about");
        assert_eq!(value["results"][0], "https://example.com/about");
    }
}
