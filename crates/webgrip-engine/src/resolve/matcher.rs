//! Text-to-element matching.
//!
//! Tiered, first match wins: exact text, substring, token-overlap fuzzy,
//! then the attribute allow-list, then `data-*` attributes. The cheap,
//! high-precision tiers run before the loose ones; the fuzzy threshold
//! deliberately trades precision for recall since every match still passes
//! the interactability gate downstream.

use crate::dom::{NodeId, PageDocument};

/// Attributes scanned when the text tiers fail.
const ATTRIBUTE_ALLOW_LIST: [&str; 5] = ["title", "alt", "aria-label", "placeholder", "value"];

/// Tokens at or below this length are ignored by the fuzzy tier.
const MIN_TOKEN_LEN: usize = 2;

#[derive(Debug, Clone)]
pub struct TextMatcher {
    /// Minimum fraction of search tokens an element must cover.
    pub fuzzy_threshold: f64,
}

impl Default for TextMatcher {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 0.5,
        }
    }
}

impl TextMatcher {
    pub fn new(fuzzy_threshold: f64) -> Self {
        Self { fuzzy_threshold }
    }

    /// Whether the element "is" the search text.
    pub fn matches(&self, doc: &PageDocument, id: NodeId, search: &str) -> bool {
        let search = search.to_lowercase();
        let search = search.trim();
        if search.is_empty() {
            return false;
        }

        let element_text = doc.text_content(id).to_lowercase();
        let element_text = element_text.trim();

        if element_text == search {
            return true;
        }
        if element_text.contains(search) {
            return true;
        }
        if self.fuzzy_match(element_text, search) {
            return true;
        }

        let node = doc.node(id);
        for attr in ATTRIBUTE_ALLOW_LIST {
            if let Some(value) = node.attrs.get(attr) {
                if value.to_lowercase().contains(search) {
                    return true;
                }
            }
        }
        node.attrs
            .data
            .values()
            .any(|v| v.to_lowercase().contains(search))
    }

    /// Token-overlap fuzzy match: a search token is covered when some element
    /// token contains it as a substring.
    fn fuzzy_match(&self, element_text: &str, search: &str) -> bool {
        let search_tokens: Vec<&str> = search
            .split_whitespace()
            .filter(|t| t.len() > MIN_TOKEN_LEN)
            .collect();
        if search_tokens.is_empty() {
            return false;
        }
        let element_tokens: Vec<&str> = element_text
            .split_whitespace()
            .filter(|t| t.len() > MIN_TOKEN_LEN)
            .collect();

        let covered = search_tokens
            .iter()
            .filter(|s| element_tokens.iter().any(|e| e.contains(*s)))
            .count();
        covered as f64 / search_tokens.len() as f64 >= self.fuzzy_threshold
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
