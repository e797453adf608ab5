use super::super::document::PageDocument;
use super::super::node::NodeData;
use super::*;

fn doc_with_button() -> (PageDocument, NodeId) {
    let mut doc = PageDocument::new("t", "https://example.com");
    let mut node = NodeData::new("button");
    node.attrs.set("id", "submit-btn");
    node.attrs.set("class", "btn btn-primary");
    node.attrs.set("type", "submit");
    let id = doc.append_element(None, node);
    (doc, id)
}

#[test]
fn test_tag_selector() {
    let (doc, id) = doc_with_button();
    let sel = SelectorList::parse("button").unwrap();
    assert!(sel.matches(&doc, id));
    let sel = SelectorList::parse("a").unwrap();
    assert!(!sel.matches(&doc, id));
}

#[test]
fn test_universal_selector() {
    let (doc, id) = doc_with_button();
    let sel = SelectorList::parse("*").unwrap();
    assert!(sel.matches(&doc, id));
}

#[test]
fn test_id_selector() {
    let (doc, id) = doc_with_button();
    assert!(SelectorList::parse("#submit-btn").unwrap().matches(&doc, id));
    assert!(!SelectorList::parse("#other").unwrap().matches(&doc, id));
}

#[test]
fn test_class_selector() {
    let (doc, id) = doc_with_button();
    assert!(SelectorList::parse(".btn").unwrap().matches(&doc, id));
    assert!(SelectorList::parse("button.btn-primary").unwrap().matches(&doc, id));
    // Class tokens, not substrings.
    assert!(!SelectorList::parse(".btn-p").unwrap().matches(&doc, id));
}

#[test]
fn test_attribute_predicates() {
    let (doc, id) = doc_with_button();
    assert!(SelectorList::parse("[type]").unwrap().matches(&doc, id));
    assert!(SelectorList::parse("input[type=\"submit\"]").is_some());
    assert!(SelectorList::parse("[type=\"submit\"]").unwrap().matches(&doc, id));
    assert!(SelectorList::parse("[id*=\"submit\"]").unwrap().matches(&doc, id));
    assert!(SelectorList::parse("[id^=\"submit\"]").unwrap().matches(&doc, id));
    assert!(!SelectorList::parse("[id^=\"btn\"]").unwrap().matches(&doc, id));
    assert!(!SelectorList::parse("[name]").unwrap().matches(&doc, id));
}

#[test]
fn test_unquoted_attribute_value() {
    let (doc, id) = doc_with_button();
    assert!(SelectorList::parse("[role=button]").is_some());
    assert!(SelectorList::parse("[type=submit]").unwrap().matches(&doc, id));
}

#[test]
fn test_comma_list() {
    let (doc, id) = doc_with_button();
    let sel = SelectorList::parse("a, button, input").unwrap();
    assert!(sel.matches(&doc, id));
}

#[test]
fn test_descendant_combinator() {
    let mut doc = PageDocument::new("t", "https://example.com");
    let container = doc.append_element(None, {
        let mut n = NodeData::new("ytd-video-renderer");
        n.attrs.set("class", "renderer");
        n
    });
    let heading = doc.append_element(Some(container), NodeData::new("h3"));
    let link = doc.append_element(Some(heading), {
        let mut n = NodeData::new("a");
        n.attrs.set("id", "video-title");
        n
    });
    let sel = SelectorList::parse("ytd-video-renderer h3 a").unwrap();
    assert!(sel.matches(&doc, link));
    assert!(!sel.matches(&doc, heading));

    let sel = SelectorList::parse("ytd-video-renderer a#video-title").unwrap();
    assert!(sel.matches(&doc, link));

    // No such ancestor chain.
    let sel = SelectorList::parse("form h3 a").unwrap();
    assert!(!sel.matches(&doc, link));
}

#[test]
fn test_unsupported_syntax_rejected() {
    assert!(SelectorList::parse("div > span").is_none());
    assert!(SelectorList::parse("a:hover").is_none());
    assert!(SelectorList::parse("").is_none());
    assert!(SelectorList::parse("li + li").is_none());
}

#[test]
fn test_data_attribute_predicate() {
    let mut doc = PageDocument::new("t", "https://example.com");
    let id = doc.append_element(None, {
        let mut n = NodeData::new("input");
        n.attrs.set("data-field", "email");
        n
    });
    let sel = SelectorList::parse("input[data-field=\"email\"]").unwrap();
    assert!(sel.matches(&doc, id));
}
