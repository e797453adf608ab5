//! Element resolution.
//!
//! A selector-based locator is authoritative: one structural query, no text
//! fallback. A text locator walks priority structural categories before the
//! full-document scan; within a tier the first match in document order wins
//! and there is no cross-candidate scoring. YouTube-family pages get a
//! dedicated secondary pass because the generic tiers tend to land on a
//! renderer wrapper instead of the actual title link.

use tracing::debug;

use crate::dom::{NodeId, PageDocument};

use super::matcher::TextMatcher;

/// What the caller wants resolved.
#[derive(Debug, Clone, Default)]
pub struct Locator {
    pub selector: Option<String>,
    pub text: Option<String>,
    pub element_type: Option<String>,
}

impl Locator {
    pub fn selector(selector: impl Into<String>) -> Self {
        Self {
            selector: Some(selector.into()),
            ..Self::default()
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Human-readable form for error messages.
    pub fn describe(&self) -> String {
        self.selector
            .clone()
            .or_else(|| self.text.clone())
            .unwrap_or_default()
    }
}

/// Structural categories tried before the full-document fallback, most
/// clickable-looking first. The renderer/heading/title hooks cover the one
/// site family with dedicated support.
const PRIORITY_SELECTORS: [&str; 16] = [
    "button",
    "a",
    "input[type=\"submit\"]",
    "input[type=\"button\"]",
    "[role=\"button\"]",
    "[onclick]",
    ".btn",
    ".button",
    "ytd-video-renderer",
    "ytd-compact-video-renderer",
    "ytd-rich-item-renderer",
    "h3",
    "h2",
    "h1",
    "[id*=\"video-title\"]",
    "[class*=\"video-title\"]",
];

/// Looser title-ish hooks tried after the main priority tiers.
const TITLE_SELECTORS: [&str; 2] = ["span[class*=\"title\"]", "div[class*=\"title\"]"];

/// Title-link queries for the YouTube secondary pass.
const YOUTUBE_TITLE_SELECTORS: [&str; 3] = [
    "ytd-video-renderer h3 a",
    "ytd-compact-video-renderer h3 a",
    "ytd-rich-item-renderer h3 a",
];

const YOUTUBE_CONTAINERS: &str =
    "ytd-video-renderer, ytd-compact-video-renderer, ytd-rich-item-renderer";

const YOUTUBE_TITLE_IN_CONTAINER: &str = "h3 a, #video-title, a#video-title";

#[derive(Debug, Clone, Default)]
pub struct Resolver {
    matcher: TextMatcher,
}

impl Resolver {
    pub fn new(matcher: TextMatcher) -> Self {
        Self { matcher }
    }

    /// Resolve a locator to the single best-matching element, or `None`.
    pub fn resolve(&self, doc: &PageDocument, locator: &Locator) -> Option<NodeId> {
        if let Some(ref selector) = locator.selector {
            // Selector requests are precise: no fallback to text search.
            return doc.query_selector(selector);
        }
        let text = locator.text.as_deref()?;
        self.resolve_text(doc, text, locator.element_type.as_deref())
    }

    /// Resolve free text via the priority tiers, the site-family pass, and
    /// the full-document fallback.
    pub fn resolve_text(
        &self,
        doc: &PageDocument,
        text: &str,
        element_type: Option<&str>,
    ) -> Option<NodeId> {
        // A type hint puts that tag at the front of the priority order.
        if let Some(tag) = element_type {
            if let Some(id) = self.first_match_in(doc, tag, text) {
                debug!(tag, "resolved via element type hint");
                return Some(id);
            }
        }

        for selector in PRIORITY_SELECTORS.iter().chain(TITLE_SELECTORS.iter()) {
            if let Some(id) = self.first_match_in(doc, selector, text) {
                debug!(selector, "resolved via priority tier");
                return Some(id);
            }
        }

        if doc.hostname().contains("youtube.com") {
            if let Some(id) = self.resolve_youtube_title(doc, text) {
                debug!("resolved via youtube title pass");
                return Some(id);
            }
        }

        // Full-document scan, first match in document order.
        let id = doc
            .all_ids()
            .find(|&id| self.matcher.matches(doc, id, text));
        if id.is_some() {
            debug!(text, "resolved via full-document fallback");
        } else {
            debug!(text, "no element matched");
        }
        id
    }

    fn first_match_in(&self, doc: &PageDocument, selector: &str, text: &str) -> Option<NodeId> {
        doc.query_selector_all(selector)
            .into_iter()
            .find(|&id| self.matcher.matches(doc, id, text))
    }

    /// Secondary pass for YouTube-family markup: prefer the actual title
    /// link over the renderer wrapper the generic tiers would return.
    fn resolve_youtube_title(&self, doc: &PageDocument, text: &str) -> Option<NodeId> {
        for selector in YOUTUBE_TITLE_SELECTORS {
            if let Some(id) = self.first_match_in(doc, selector, text) {
                return Some(id);
            }
        }
        for container in doc.query_selector_all(YOUTUBE_CONTAINERS) {
            if let Some(title) = doc
                .query_within(Some(container), YOUTUBE_TITLE_IN_CONTAINER)
                .into_iter()
                .find(|&id| self.matcher.matches(doc, id, text))
            {
                return Some(title);
            }
        }
        None
    }

    /// Legacy whole-document substring finder used by `findElement`.
    pub fn find_by_text_contains(&self, doc: &PageDocument, text: &str) -> Option<NodeId> {
        let needle = text.to_lowercase();
        doc.all_ids()
            .find(|&id| doc.text_content(id).to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
