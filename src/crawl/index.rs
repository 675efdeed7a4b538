// src/crawl/index.rs
// =============================================================================
// The in-memory page index: URL -> fetched page text.
//
// Entries keep the order they were inserted in, which is the order the
// crawler visited the pages. Search results come back in that same order.
//
// Rust concepts:
// - IndexMap: A HashMap that also remembers insertion order
// - impl Trait in argument position: insert() takes anything string-like
// =============================================================================

use indexmap::map::Entry;
use indexmap::IndexMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageIndex {
    pages: IndexMap<String, String>,
}

impl PageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    // Adds a page. An existing entry is never overwritten.
    //
    // Returns true if the page was new.
    pub fn insert(&mut self, url: impl Into<String>, text: impl Into<String>) -> bool {
        match self.pages.entry(url.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(text.into());
                true
            }
        }
    }

    pub fn get(&self, url: &str) -> Option<&str> {
        self.pages.get(url).map(String::as_str)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.pages.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterates `(url, text)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pages.iter().map(|(url, text)| (url.as_str(), text.as_str()))
    }

    // Case-sensitive substring search over the stored text
    //
    // No tokenizing, no ranking. An empty keyword matches every page,
    // the same way "".contains("") is true.
    pub fn search(&self, keyword: &str) -> Vec<String> {
        self.iter()
            .filter(|(_, text)| text.contains(keyword))
            .map(|(url, _)| url.to_string())
            .collect()
    }

    pub fn clear(&mut self) {
        self.pages.clear();
    }
}

impl<K, V> FromIterator<(K, V)> for PageIndex
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut index = PageIndex::new();
        for (url, text) in iter {
            index.insert(url, text);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_does_not_overwrite() {
        let mut index = PageIndex::new();
        assert!(index.insert("https://example.com", "first"));
        assert!(!index.insert("https://example.com", "second"));
        assert_eq!(index.get("https://example.com"), Some("first"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_search_keeps_insertion_order() {
        let index: PageIndex = [
            ("c", "rust crawler"),
            ("a", "python crawler"),
            ("b", "nothing here"),
        ]
        .into_iter()
        .collect();

        assert_eq!(index.search("crawler"), vec!["c", "a"]);
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let index: PageIndex = [("page1", "Contains the Keyword")].into_iter().collect();
        assert!(index.search("keyword").is_empty());
        assert_eq!(index.search("Keyword"), vec!["page1"]);
    }

    #[test]
    fn test_clear() {
        let mut index: PageIndex = [("page1", "text")].into_iter().collect();
        index.clear();
        assert!(index.is_empty());
        assert!(!index.contains("page1"));
    }
}
