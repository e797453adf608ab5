//! Interactability classification.
//!
//! A pure read of current style and geometry; nothing is cached because the
//! page mutates between calls. The viewport rule is conservative: the whole
//! bounding box must sit inside the viewport, so callers that scroll first
//! must do so before checking.

use crate::dom::{NodeId, PageDocument};

/// Whether the element can currently be acted upon: visible, enabled, and
/// fully in the viewport.
pub fn is_interactable(doc: &PageDocument, id: NodeId) -> bool {
    let node = doc.node(id);

    if node.bounds.is_empty() {
        return false;
    }
    if node.style.display == "none" || node.style.visibility == "hidden" {
        return false;
    }
    if node.style.opacity == 0.0 {
        return false;
    }
    if node.disabled {
        return false;
    }
    node.bounds.is_fully_inside(&doc.viewport().rect())
}

#[cfg(test)]
#[path = "interactable_tests.rs"]
mod tests;
