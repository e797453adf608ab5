//! Document nodes and the dispatched-event record.

use serde::{Deserialize, Serialize};

use super::types::{BoundingBox, ComputedStyle, NodeAttributes};

/// Index of a node in the document arena. Arena order is document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// A file staged on a file input or carried by a drag payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagedFile {
    pub name: String,
    pub mime: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

/// One element in the document.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Tag name, lowercase.
    pub tag: String,
    pub attrs: NodeAttributes,
    /// Direct text (children's text is collected separately).
    pub text: String,
    /// Live value for inputs/textareas/selects.
    pub value: String,
    pub bounds: BoundingBox,
    pub style: ComputedStyle,
    /// Inline style string; highlight feedback mutates and restores this.
    pub inline_style: String,
    pub disabled: bool,
    pub content_editable: bool,
    /// Files attached to a file input.
    pub files: Vec<StagedFile>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl NodeData {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_lowercase(),
            attrs: NodeAttributes::default(),
            text: String::new(),
            value: String::new(),
            bounds: BoundingBox::default(),
            style: ComputedStyle::default(),
            inline_style: String::new(),
            disabled: false,
            content_editable: false,
            files: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Whether text can be typed into this element.
    pub fn is_editable(&self) -> bool {
        self.tag == "input" || self.tag == "textarea" || self.content_editable
    }

    /// Whether this is a form field (input, textarea, select).
    pub fn is_form_field(&self) -> bool {
        matches!(self.tag.as_str(), "input" | "textarea" | "select")
    }

    /// Tag name in the uppercase form reports use.
    pub fn tag_upper(&self) -> String {
        self.tag.to_uppercase()
    }
}

/// Extra payload attached to a dispatched event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventDetail {
    None,
    Mouse { x: f64, y: f64, button: u8 },
    Key { key: String, key_code: u32 },
    Files { count: usize },
}

/// A synthetic event recorded by the document.
///
/// The engine does not run page scripts; dispatching appends to the
/// document's event log, which hosts replay against the live page and tests
/// assert on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchedEvent {
    /// Target element; `None` means the event was dispatched on the document.
    pub target: Option<NodeId>,
    /// Event type: `click`, `input`, `change`, `keydown`, `drop`, ...
    pub event_type: String,
    pub detail: EventDetail,
}
