use super::*;

#[test]
fn test_click_request_decodes() {
    let json = serde_json::json!({
        "action": "clickElement",
        "text": "Sign in"
    });
    let req: ActionRequest = serde_json::from_value(json).unwrap();
    match req {
        ActionRequest::ClickElement(p) => {
            assert_eq!(p.text.as_deref(), Some("Sign in"));
            assert!(p.selector.is_none());
            assert!(p.wait_for_visible);
            assert!(p.highlight);
        }
        other => panic!("wrong variant: {:?}", other),
    }
}

#[test]
fn test_click_request_flags_override() {
    let json = serde_json::json!({
        "action": "clickElement",
        "selector": "#go",
        "wait_for_visible": false,
        "highlight": false
    });
    let req: ActionRequest = serde_json::from_value(json).unwrap();
    match req {
        ActionRequest::ClickElement(p) => {
            assert!(!p.wait_for_visible);
            assert!(!p.highlight);
        }
        other => panic!("wrong variant: {:?}", other),
    }
}

#[test]
fn test_unknown_action_fails_to_decode() {
    let json = serde_json::json!({ "action": "doesNotExist" });
    assert!(serde_json::from_value::<ActionRequest>(json).is_err());
}

#[test]
fn test_type_text_defaults() {
    let json = serde_json::json!({
        "action": "typeText",
        "selector": "input[name=\"q\"]",
        "text": "rust"
    });
    let req: ActionRequest = serde_json::from_value(json).unwrap();
    match req {
        ActionRequest::TypeText(p) => {
            assert_eq!(p.text, "rust");
            assert!(!p.clear);
        }
        other => panic!("wrong variant: {:?}", other),
    }
}

#[test]
fn test_wait_for_element_defaults() {
    let json = serde_json::json!({
        "action": "waitForElement",
        "text": "Results"
    });
    let req: ActionRequest = serde_json::from_value(json).unwrap();
    match req {
        ActionRequest::WaitForElement(p) => {
            assert_eq!(p.timeout, 10_000);
            assert_eq!(p.interval, 500);
        }
        other => panic!("wrong variant: {:?}", other),
    }
}

#[test]
fn test_batch_click_defaults() {
    let json = serde_json::json!({
        "action": "batchClick",
        "elements": [
            { "text": "Accept" },
            { "selector": ".next" }
        ]
    });
    let req: ActionRequest = serde_json::from_value(json).unwrap();
    match req {
        ActionRequest::BatchClick(p) => {
            assert_eq!(p.elements.len(), 2);
            assert_eq!(p.delay, 1_000);
            assert_eq!(p.elements[0].text.as_deref(), Some("Accept"));
            assert_eq!(p.elements[1].selector.as_deref(), Some(".next"));
        }
        other => panic!("wrong variant: {:?}", other),
    }
}

#[test]
fn test_highlight_defaults() {
    let json = serde_json::json!({
        "action": "highlightElements",
        "selectors": ["button"]
    });
    let req: ActionRequest = serde_json::from_value(json).unwrap();
    match req {
        ActionRequest::HighlightElements(p) => {
            assert_eq!(p.duration, 3_000);
            assert_eq!(p.color, "red");
        }
        other => panic!("wrong variant: {:?}", other),
    }
}

#[test]
fn test_fill_form_fields_map() {
    let json = serde_json::json!({
        "action": "fillForm",
        "fields": { "email": "a@b.c", "name": "Ada" }
    });
    let req: ActionRequest = serde_json::from_value(json).unwrap();
    match req {
        ActionRequest::FillForm(p) => {
            assert_eq!(p.fields.len(), 2);
            assert_eq!(p.fields["email"], "a@b.c");
        }
        other => panic!("wrong variant: {:?}", other),
    }
}

#[test]
fn test_verb_roundtrip() {
    let json = serde_json::json!({ "action": "scrollPage", "direction": "down" });
    let req: ActionRequest = serde_json::from_value(json).unwrap();
    assert_eq!(req.verb(), "scrollPage");
    let back = serde_json::to_value(&req).unwrap();
    assert_eq!(back["action"], "scrollPage");
    assert_eq!(back["direction"], "down");
}

#[test]
fn test_control_request_decodes() {
    let json = serde_json::json!({ "action": "updateControlState", "active": true });
    let req: ControlRequest = serde_json::from_value(json).unwrap();
    match req {
        ControlRequest::UpdateState { active } => assert!(active),
        other => panic!("wrong variant: {:?}", other),
    }
}

#[test]
fn test_enhanced_drag_drop_defaults() {
    let json = serde_json::json!({
        "action": "enhancedDragDrop",
        "source": "card",
        "target": "trash"
    });
    let req: ActionRequest = serde_json::from_value(json).unwrap();
    match req {
        ActionRequest::EnhancedDragDrop(p) => {
            assert_eq!(p.duration, 1_000);
            assert!(p.visual_feedback);
            assert!(p.files.is_none());
        }
        other => panic!("wrong variant: {:?}", other),
    }
}
