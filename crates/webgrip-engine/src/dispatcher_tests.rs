use serde_json::json;

use crate::dom::{BoundingBox, NodeData, PageDocument};
use crate::session::PageSession;

use super::*;

fn session_with_button(text: &str) -> PageSession {
    let mut doc = PageDocument::new("t", "https://example.com");
    doc.append_element(None, {
        let mut n = NodeData::new("button");
        n.text = text.to_string();
        n.bounds = BoundingBox::new(10.0, 10.0, 100.0, 30.0);
        n
    });
    PageSession::new(doc)
}

#[tokio::test(start_paused = true)]
async fn test_unknown_action_exact_envelope() {
    let session = session_with_button("Save");
    let response = handle(&session, json!({ "action": "doesNotExist" })).await;
    assert_eq!(response, json!({ "error": "Unknown action" }));
    // And no document mutation happened.
    assert!(session.with_doc(|d| d.events().is_empty()));
}

#[tokio::test(start_paused = true)]
async fn test_missing_action_is_unknown() {
    let session = session_with_button("Save");
    let response = handle(&session, json!({ "text": "Save" })).await;
    assert_eq!(response, json!({ "error": "Unknown action" }));
}

#[tokio::test(start_paused = true)]
async fn test_known_action_with_bad_params_is_distinct() {
    let session = session_with_button("Save");
    let result = dispatch_value(&session, json!({ "action": "typeText" })).await;
    let error = result.error_message().unwrap().to_string();
    assert_ne!(error, "Unknown action");
    assert!(error.starts_with("Invalid parameters for typeText"));
}

#[tokio::test(start_paused = true)]
async fn test_click_roundtrip_through_value() {
    let session = session_with_button("Save");
    let result = dispatch_value(
        &session,
        json!({ "action": "clickElement", "text": "Save" }),
    )
    .await;
    assert!(result.is_success());
    let encoded = serde_json::to_value(&result).unwrap();
    assert_eq!(encoded["success"], true);
    assert_eq!(encoded["message"], "Clicked element: Save");
}

#[tokio::test(start_paused = true)]
async fn test_failure_envelope_has_no_success_field() {
    let session = session_with_button("Save");
    let result = dispatch_value(
        &session,
        json!({ "action": "clickElement", "text": "Missing" }),
    )
    .await;
    let encoded = serde_json::to_value(&result).unwrap();
    assert!(encoded.get("success").is_none());
    assert!(encoded.get("error").is_some());
}

#[tokio::test(start_paused = true)]
async fn test_executor_error_resolves_to_envelope() {
    let session = session_with_button("Save");
    let result = dispatch_value(
        &session,
        json!({ "action": "scrollPage", "direction": "diagonal" }),
    )
    .await;
    assert_eq!(result.error_message(), Some("Invalid scroll direction"));
}

#[tokio::test(start_paused = true)]
async fn test_control_family_roundtrip() {
    let session = session_with_button("Save");

    let state = handle(&session, json!({ "action": "getControlState" })).await;
    assert_eq!(state, json!({ "active": false }));

    let shown = handle(&session, json!({ "action": "showControlToggle" })).await;
    assert_eq!(shown, json!({ "success": true }));

    handle(
        &session,
        json!({ "action": "updateControlState", "active": true }),
    )
    .await;
    let state = handle(&session, json!({ "action": "getControlState" })).await;
    assert_eq!(state, json!({ "active": true }));

    let hidden = handle(&session, json!({ "action": "hideControlToggle" })).await;
    assert_eq!(hidden, json!({ "success": true }));
    assert_eq!(
        handle(&session, json!({ "action": "getControlState" })).await,
        json!({ "active": false })
    );
}

#[tokio::test(start_paused = true)]
async fn test_shipped_login_fixture_is_servable() {
    let raw = include_str!("../../../fixtures/login.json");
    let value: Value = serde_json::from_str(raw).unwrap();
    let doc = PageDocument::from_json(value).unwrap();
    let session = PageSession::new(doc);

    let result = dispatch_value(
        &session,
        json!({ "action": "clickElement", "text": "Sign in" }),
    )
    .await;
    assert!(result.is_success());

    let result = dispatch_value(
        &session,
        json!({ "action": "typeText", "selector": "#email", "text": "a@b.com" }),
    )
    .await;
    assert!(result.is_success());
    assert_eq!(
        session.with_doc(|d| d.query_selector("#email").map(|id| d.node(id).value.clone())),
        Some("a@b.com".to_string())
    );
}

#[tokio::test(start_paused = true)]
async fn test_control_verb_with_bad_params_names_the_verb() {
    let session = session_with_button("Save");
    let response = handle(&session, json!({ "action": "updateControlState" })).await;
    let error = response["error"].as_str().unwrap();
    assert!(error.starts_with("Invalid parameters for updateControlState"));
}

#[tokio::test(start_paused = true)]
async fn test_every_verb_is_routable() {
    // A minimal valid payload per verb; each must route somewhere other than
    // the unknown-action branch.
    let payloads = vec![
        json!({ "action": "clickElement", "text": "Save" }),
        json!({ "action": "typeText", "selector": "#q", "text": "x" }),
        json!({ "action": "scrollPage", "direction": "down" }),
        json!({ "action": "getPageInfo" }),
        json!({ "action": "findElement", "text": "Save" }),
        json!({ "action": "mouseMove", "x": 1.0, "y": 2.0 }),
        json!({ "action": "mouseClick", "x": 1.0, "y": 2.0 }),
        json!({ "action": "takeScreenshot" }),
        json!({ "action": "doubleClick", "text": "Save" }),
        json!({ "action": "rightClick", "text": "Save" }),
        json!({ "action": "hoverElement", "text": "Save" }),
        json!({ "action": "clearField", "selector": "#q" }),
        json!({ "action": "selectAll" }),
        json!({ "action": "copyText" }),
        json!({ "action": "pasteText", "text": "x" }),
        json!({ "action": "dragDrop", "source": "a", "target": "b" }),
        json!({ "action": "keyPress", "key": "Enter" }),
        json!({ "action": "keyCombination", "keys": "Ctrl+C" }),
        json!({ "action": "fillForm", "fields": {} }),
        json!({ "action": "extractData", "data_type": "text" }),
        json!({ "action": "debugElements", "text": "Save" }),
        json!({ "action": "waitForElement", "text": "Save", "timeout": 100, "interval": 50 }),
        json!({ "action": "batchClick", "elements": [] }),
        json!({ "action": "smartFillForm", "fields": {} }),
        json!({ "action": "highlightElements" }),
        json!({ "action": "getElementInfo", "text": "Save" }),
        json!({ "action": "uploadFile", "file_data": ["x"] }),
        json!({ "action": "enhancedDragDrop", "source": "Save", "target": "Save" }),
        json!({ "action": "simulateFileUpload" }),
    ];

    for payload in payloads {
        let session = session_with_button("Save");
        let result = dispatch_value(&session, payload.clone()).await;
        if let Some(error) = result.error_message() {
            assert_ne!(error, "Unknown action", "payload: {payload}");
            assert!(
                !error.starts_with("Invalid parameters"),
                "payload: {payload}, error: {error}"
            );
        }
    }
}
