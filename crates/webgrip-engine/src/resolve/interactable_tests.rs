use super::*;
use crate::dom::{BoundingBox, NodeData};

fn visible_button(doc: &mut PageDocument) -> NodeId {
    doc.append_element(None, {
        let mut n = NodeData::new("button");
        n.bounds = BoundingBox::new(100.0, 100.0, 120.0, 40.0);
        n
    })
}

#[test]
fn test_visible_button_is_interactable() {
    let mut doc = PageDocument::new("t", "https://example.com");
    let id = visible_button(&mut doc);
    assert!(is_interactable(&doc, id));
}

#[test]
fn test_idempotent_verdict() {
    let mut doc = PageDocument::new("t", "https://example.com");
    let id = visible_button(&mut doc);
    let first = is_interactable(&doc, id);
    let second = is_interactable(&doc, id);
    assert_eq!(first, second);
    assert!(first);
}

#[test]
fn test_zero_area_fails() {
    let mut doc = PageDocument::new("t", "https://example.com");
    let id = doc.append_element(None, NodeData::new("button"));
    assert!(!is_interactable(&doc, id));
}

#[test]
fn test_display_none_fails() {
    let mut doc = PageDocument::new("t", "https://example.com");
    let id = visible_button(&mut doc);
    doc.node_mut(id).style.display = "none".to_string();
    assert!(!is_interactable(&doc, id));
}

#[test]
fn test_visibility_hidden_fails() {
    let mut doc = PageDocument::new("t", "https://example.com");
    let id = visible_button(&mut doc);
    doc.node_mut(id).style.visibility = "hidden".to_string();
    assert!(!is_interactable(&doc, id));
}

#[test]
fn test_zero_opacity_fails() {
    let mut doc = PageDocument::new("t", "https://example.com");
    let id = visible_button(&mut doc);
    doc.node_mut(id).style.opacity = 0.0;
    assert!(!is_interactable(&doc, id));
}

#[test]
fn test_disabled_fails() {
    let mut doc = PageDocument::new("t", "https://example.com");
    let id = visible_button(&mut doc);
    doc.node_mut(id).disabled = true;
    assert!(!is_interactable(&doc, id));
}

#[test]
fn test_partly_outside_viewport_fails() {
    let mut doc = PageDocument::new("t", "https://example.com");
    let id = doc.append_element(None, {
        let mut n = NodeData::new("button");
        // Straddles the bottom edge of the default 1280x720 viewport.
        n.bounds = BoundingBox::new(100.0, 700.0, 120.0, 40.0);
        n
    });
    assert!(!is_interactable(&doc, id));
}

#[test]
fn test_scroll_then_check_passes() {
    let mut doc = PageDocument::new("t", "https://example.com");
    let id = doc.append_element(None, {
        let mut n = NodeData::new("button");
        n.bounds = BoundingBox::new(100.0, 2000.0, 120.0, 40.0);
        n
    });
    assert!(!is_interactable(&doc, id));
    doc.scroll_into_view(id);
    assert!(is_interactable(&doc, id));
}
