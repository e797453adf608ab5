use super::*;
use crate::dom::{BoundingBox, NodeData};

fn clickable(tag: &str, text: &str) -> NodeData {
    let mut n = NodeData::new(tag);
    n.text = text.to_string();
    n.bounds = BoundingBox::new(10.0, 10.0, 100.0, 30.0);
    n
}

#[test]
fn test_similar_by_text_overlap() {
    let mut doc = PageDocument::new("t", "https://example.com");
    doc.append_element(None, clickable("button", "Sign in"));
    doc.append_element(None, clickable("button", "Sign up"));
    doc.append_element(None, clickable("a", "Pricing"));

    let similar = similar_elements(&doc, "sign in now");
    assert_eq!(similar.len(), 1);
    assert_eq!(similar[0]["text"], "Sign in");
    assert_eq!(similar[0]["tagName"], "BUTTON");
}

#[test]
fn test_similar_by_attribute() {
    let mut doc = PageDocument::new("t", "https://example.com");
    doc.append_element(None, {
        let mut n = clickable("button", "");
        n.attrs.set("aria-label", "Close dialog");
        n
    });
    let similar = similar_elements(&doc, "close");
    assert_eq!(similar.len(), 1);
}

#[test]
fn test_caps_at_five() {
    let mut doc = PageDocument::new("t", "https://example.com");
    for i in 0..8 {
        doc.append_element(None, clickable("button", &format!("Save draft {i}")));
    }
    assert_eq!(similar_elements(&doc, "save").len(), 5);
}

#[test]
fn test_non_clickables_ignored() {
    let mut doc = PageDocument::new("t", "https://example.com");
    doc.append_element(None, clickable("div", "Save your work"));
    assert!(similar_elements(&doc, "save").is_empty());
}

#[test]
fn test_suggestion_lines_shape() {
    let mut doc = PageDocument::new("t", "https://example.com");
    doc.append_element(None, clickable("button", "Checkout"));

    let lines = suggestion_lines(&doc, "checkout");
    assert_eq!(lines[0], "Similar elements found:");
    assert!(lines[1].is_object());
    let idx = lines.iter().position(|l| l == "Try these selectors:").unwrap();
    assert_eq!(lines.len() - idx - 1, 7);
    assert_eq!(lines[idx + 1], "button");
}

#[test]
fn test_suggestion_lines_without_matches() {
    let doc = PageDocument::new("t", "https://example.com");
    let lines = suggestion_lines(&doc, "anything");
    assert_eq!(lines[0], "Try these selectors:");
    assert_eq!(lines.len(), 8);
}
