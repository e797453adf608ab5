//! The page document model.
//!
//! `PageDocument` is the injected document capability every resolver and
//! executor operates through: an arena of nodes in document order, viewport
//! and scroll state, focus, and a log of dispatched synthetic events. Tests
//! and the CLI harness build documents from JSON fixtures; a host embedding
//! the engine mirrors the live DOM into this model and replays the event log
//! against the page.

use serde::{Deserialize, Serialize};
use url::Url;

use super::node::{DispatchedEvent, EventDetail, NodeData, NodeId, StagedFile};
use super::selector::{self, SelectorList};
use super::types::{BoundingBox, ComputedStyle, ViewportInfo};

#[derive(Debug, Clone)]
pub struct PageDocument {
    title: String,
    url: String,
    viewport: ViewportInfo,
    nodes: Vec<NodeData>,
    events: Vec<DispatchedEvent>,
    focused: Option<NodeId>,
    /// Set by selectAll; cleared when focus moves.
    select_all_active: bool,
}

impl PageDocument {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            viewport: ViewportInfo::default(),
            nodes: Vec::new(),
            events: Vec::new(),
            focused: None,
            select_all_active: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Hostname of the page URL, empty when the URL does not parse.
    pub fn hostname(&self) -> String {
        Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default()
    }

    pub fn viewport(&self) -> &ViewportInfo {
        &self.viewport
    }

    pub fn set_viewport(&mut self, viewport: ViewportInfo) {
        self.viewport = viewport;
    }

    /// Append an element to the arena. Arena order is document order.
    pub fn append_element(&mut self, parent: Option<NodeId>, mut node: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = parent;
        self.nodes.push(node);
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    pub fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node ids in document order.
    pub fn all_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Full text content of a node: direct text plus all descendants', in
    /// document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out.trim().to_string()
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let node = &self.nodes[id.0];
        if !node.text.is_empty() {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
            out.push_str(node.text.trim());
        }
        for child in &node.children {
            self.collect_text(*child, out);
        }
    }

    /// Whether `ancestor` is a strict ancestor of `id`.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = self.nodes[id.0].parent;
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.nodes[p.0].parent;
        }
        false
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// First element matching the selector, in document order.
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.query_within(None, selector).into_iter().next()
    }

    /// All elements matching the selector, in document order.
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        self.query_within(None, selector)
    }

    /// All matches scoped to descendants of `root` (or the whole document).
    pub fn query_within(&self, root: Option<NodeId>, selector: &str) -> Vec<NodeId> {
        let Some(parsed) = selector::parse_or_log(selector) else {
            return Vec::new();
        };
        self.query_parsed_within(root, &parsed)
    }

    fn query_parsed_within(&self, root: Option<NodeId>, parsed: &SelectorList) -> Vec<NodeId> {
        self.all_ids()
            .filter(|&id| match root {
                Some(root) => self.is_ancestor(root, id),
                None => true,
            })
            .filter(|&id| parsed.matches(self, id))
            .collect()
    }

    // ------------------------------------------------------------------
    // Scrolling
    // ------------------------------------------------------------------

    /// Total scrollable height: the lowest node edge on the page.
    pub fn scroll_height(&self) -> f64 {
        self.nodes
            .iter()
            .map(|n| n.bounds.bottom())
            .fold(self.viewport.height, f64::max)
    }

    /// Total scrollable width: the rightmost node edge on the page.
    pub fn scroll_width(&self) -> f64 {
        self.nodes
            .iter()
            .map(|n| n.bounds.right())
            .fold(self.viewport.width, f64::max)
    }

    pub fn scroll_by(&mut self, dx: f64, dy: f64) {
        self.scroll_to(self.viewport.scroll_x + dx, self.viewport.scroll_y + dy);
    }

    pub fn scroll_to(&mut self, x: f64, y: f64) {
        let max_x = (self.scroll_width() - self.viewport.width).max(0.0);
        let max_y = (self.scroll_height() - self.viewport.height).max(0.0);
        self.viewport.scroll_x = x.clamp(0.0, max_x);
        self.viewport.scroll_y = y.clamp(0.0, max_y);
    }

    /// Center the element in the viewport, clamped to page bounds.
    pub fn scroll_into_view(&mut self, id: NodeId) {
        let (cx, cy) = self.nodes[id.0].bounds.center();
        self.scroll_to(
            cx - self.viewport.width / 2.0,
            cy - self.viewport.height / 2.0,
        );
    }

    // ------------------------------------------------------------------
    // Focus, selection, events
    // ------------------------------------------------------------------

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    pub fn focus(&mut self, id: NodeId) {
        self.focused = Some(id);
        self.select_all_active = false;
        self.dispatch(Some(id), "focus", EventDetail::None);
    }

    pub fn select_all(&mut self) {
        self.select_all_active = true;
    }

    pub fn selection_active(&self) -> bool {
        self.select_all_active
    }

    /// Text covered by the current selection: the focused field's value, or
    /// the whole body text after selectAll.
    pub fn selected_text(&self) -> Option<String> {
        if !self.select_all_active {
            return None;
        }
        match self.focused {
            Some(id) if self.nodes[id.0].is_form_field() => {
                Some(self.nodes[id.0].value.clone())
            }
            _ => {
                let mut out = String::new();
                for id in self.all_ids() {
                    let node = &self.nodes[id.0];
                    if node.parent.is_none() {
                        self.collect_text(id, &mut out);
                    }
                }
                Some(out.trim().to_string())
            }
        }
    }

    /// Record a synthetic event against an element (or the document).
    pub fn dispatch(&mut self, target: Option<NodeId>, event_type: &str, detail: EventDetail) {
        self.events.push(DispatchedEvent {
            target,
            event_type: event_type.to_string(),
            detail,
        });
    }

    pub fn events(&self) -> &[DispatchedEvent] {
        &self.events
    }

    /// Events dispatched against one element.
    pub fn events_for(&self, id: NodeId) -> Vec<&DispatchedEvent> {
        self.events
            .iter()
            .filter(|e| e.target == Some(id))
            .collect()
    }

    /// Drain the event log; hosts call this after replaying events.
    pub fn take_events(&mut self) -> Vec<DispatchedEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn attach_files(&mut self, id: NodeId, files: Vec<StagedFile>) {
        self.nodes[id.0].files = files;
    }

    // ------------------------------------------------------------------
    // Fixtures
    // ------------------------------------------------------------------

    /// Build a document from a fixture description.
    pub fn from_fixture(fixture: &PageFixture) -> Self {
        let mut doc = Self::new(&fixture.title, &fixture.url);
        doc.viewport = fixture.viewport.clone();
        for node in &fixture.body {
            doc.append_fixture_node(None, node);
        }
        doc
    }

    /// Build a document from a JSON fixture value.
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        let fixture: PageFixture = serde_json::from_value(value)?;
        Ok(Self::from_fixture(&fixture))
    }

    fn append_fixture_node(&mut self, parent: Option<NodeId>, spec: &NodeFixture) {
        let mut node = NodeData::new(&spec.tag);
        node.text = spec.text.clone();
        node.value = spec.value.clone();
        node.bounds = spec.bounds;
        node.style = spec.style.clone();
        node.disabled = spec.disabled;
        node.content_editable = spec.content_editable;
        for (name, value) in &spec.attrs {
            node.attrs.set(name, value.clone());
        }
        let id = self.append_element(parent, node);
        for child in &spec.children {
            self.append_fixture_node(Some(id), child);
        }
    }
}

/// JSON page fixture consumed by tests and the CLI harness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageFixture {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub viewport: ViewportInfo,
    #[serde(default)]
    pub body: Vec<NodeFixture>,
}

/// One element in a fixture tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeFixture {
    pub tag: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub attrs: std::collections::BTreeMap<String, String>,
    #[serde(default)]
    pub bounds: BoundingBox,
    #[serde(default)]
    pub style: ComputedStyle,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub content_editable: bool,
    #[serde(default)]
    pub children: Vec<NodeFixture>,
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
