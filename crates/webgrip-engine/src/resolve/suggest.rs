//! Recovery suggestions for failed lookups.
//!
//! When a click target cannot be found we scan the common clickable
//! categories for loosely similar elements and hand back structured
//! candidates plus ready-to-copy hints.

use serde_json::{Value, json};

use crate::dom::PageDocument;

const CLICKABLE_SELECTORS: &str =
    "button, a, input[type=\"submit\"], input[type=\"button\"], [role=\"button\"]";

const HINT_ATTRIBUTES: [&str; 4] = ["title", "aria-label", "placeholder", "value"];

const COMMON_SELECTORS: [&str; 7] = [
    "button",
    "a",
    "input[type=\"submit\"]",
    "input[type=\"button\"]",
    "[role=\"button\"]",
    ".btn",
    ".button",
];

const MAX_SUGGESTIONS: usize = 5;

/// Up to five clickable elements whose text or labelling attributes overlap
/// the failed search text.
pub fn similar_elements(doc: &PageDocument, search: &str) -> Vec<Value> {
    let needle = search.to_lowercase();
    let mut out = Vec::new();
    for id in doc.query_selector_all(CLICKABLE_SELECTORS) {
        if out.len() >= MAX_SUGGESTIONS {
            break;
        }
        let node = doc.node(id);
        let text = doc.text_content(id);
        let lower = text.to_lowercase();
        let text_hit = !needle.is_empty()
            && (lower.contains(&needle) || (!lower.is_empty() && needle.contains(&lower)));
        let attr_hit = HINT_ATTRIBUTES.iter().any(|a| {
            node.attrs
                .get(a)
                .is_some_and(|v| v.to_lowercase().contains(&needle))
        });
        if text_hit || attr_hit {
            out.push(json!({
                "text": text,
                "tagName": node.tag_upper(),
                "id": node.attrs.get("id").unwrap_or_default(),
                "className": node.attrs.get("class").unwrap_or_default(),
            }));
        }
    }
    out
}

/// Suggestion strings attached to a not-found error.
pub fn suggestion_lines(doc: &PageDocument, search: &str) -> Vec<Value> {
    let similar = similar_elements(doc, search);
    let mut lines = Vec::new();
    if !similar.is_empty() {
        lines.push(json!("Similar elements found:"));
        lines.extend(similar);
    }
    lines.push(json!("Try these selectors:"));
    for selector in COMMON_SELECTORS {
        lines.push(json!(selector));
    }
    lines
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
