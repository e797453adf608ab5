use webgrip_protocols::{ActionError, ClickParams, MouseClickParams, TextTargetParams};

use crate::dom::{BoundingBox, NodeData, PageDocument};
use crate::session::PageSession;

use super::*;

fn click_params(text: &str) -> ClickParams {
    ClickParams {
        selector: None,
        text: Some(text.to_string()),
        element_type: None,
        wait_for_visible: true,
        highlight: true,
    }
}

fn button(text: &str) -> NodeData {
    let mut n = NodeData::new("button");
    n.text = text.to_string();
    n.bounds = BoundingBox::new(10.0, 10.0, 100.0, 30.0);
    n
}

#[tokio::test(start_paused = true)]
async fn test_click_by_text() {
    let mut doc = PageDocument::new("t", "https://example.com");
    let id = doc.append_element(None, button("Save"));
    let session = PageSession::new(doc);

    let result = click_element(&session, click_params("Save")).await.unwrap();
    assert!(result.is_success());
    let events = session.with_doc(|d| d.events_for(id).len());
    // focus is never dispatched by click; expect exactly the click event.
    assert_eq!(events, 1);
    assert!(session.with_doc(|d| d.events_for(id)[0].event_type == "click"));
}

#[tokio::test(start_paused = true)]
async fn test_click_reports_element_info() {
    let mut doc = PageDocument::new("t", "https://example.com");
    doc.append_element(None, button("Save"));
    let session = PageSession::new(doc);

    let result = click_element(&session, click_params("Save")).await.unwrap();
    let encoded = serde_json::to_value(&result).unwrap();
    assert_eq!(encoded["element_info"]["tagName"], "BUTTON");
    assert_eq!(encoded["element_info"]["text"], "Save");
    assert_eq!(encoded["element_info"]["position"]["width"], 100.0);
}

#[tokio::test(start_paused = true)]
async fn test_click_blocked_on_hidden_element() {
    let mut doc = PageDocument::new("t", "https://example.com");
    let id = doc.append_element(None, {
        let mut n = button("Save");
        n.style.display = "none".to_string();
        n
    });
    let session = PageSession::new(doc);

    let err = click_element(&session, click_params("Save")).await.unwrap_err();
    assert!(matches!(err, ActionError::NotInteractable(_)));
    // No click event was dispatched.
    assert!(session.with_doc(|d| d.events_for(id).is_empty()));
}

#[tokio::test(start_paused = true)]
async fn test_click_hidden_allowed_when_wait_disabled() {
    let mut doc = PageDocument::new("t", "https://example.com");
    let id = doc.append_element(None, {
        let mut n = button("Save");
        n.style.display = "none".to_string();
        n
    });
    let session = PageSession::new(doc);

    let mut params = click_params("Save");
    params.wait_for_visible = false;
    let result = click_element(&session, params).await.unwrap();
    assert!(result.is_success());
    assert_eq!(session.with_doc(|d| d.events_for(id).len()), 1);
}

#[tokio::test(start_paused = true)]
async fn test_click_not_found_carries_suggestions() {
    let mut doc = PageDocument::new("t", "https://example.com");
    doc.append_element(None, button("Sign in"));
    let session = PageSession::new(doc);

    let result = click_element(&session, click_params("Sign in now please"))
        .await
        .unwrap();
    let encoded = serde_json::to_value(&result).unwrap();
    assert_eq!(encoded["error"], "Element not found: Sign in now please");
    assert!(encoded["suggestions"].is_array());
}

#[tokio::test(start_paused = true)]
async fn test_click_applies_highlight() {
    let mut doc = PageDocument::new("t", "https://example.com");
    let id = doc.append_element(None, button("Save"));
    let session = PageSession::new(doc);

    click_element(&session, click_params("Save")).await.unwrap();
    // The highlight is still on right after the click resolves.
    assert!(session.is_highlighted(id));
}

#[tokio::test(start_paused = true)]
async fn test_click_without_locator_is_validation_error() {
    let doc = PageDocument::new("t", "https://example.com");
    let session = PageSession::new(doc);
    let err = click_element(
        &session,
        ClickParams {
            selector: None,
            text: None,
            element_type: None,
            wait_for_visible: true,
            highlight: false,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ActionError::Validation(_)));
}

#[tokio::test(start_paused = true)]
async fn test_double_click_dispatches_dblclick() {
    let mut doc = PageDocument::new("t", "https://example.com");
    let id = doc.append_element(None, button("Open"));
    let session = PageSession::new(doc);

    let result = double_click(
        &session,
        TextTargetParams {
            text: "Open".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(
        serde_json::to_value(&result).unwrap()["message"],
        "Double-clicked: Open"
    );
    assert!(session.with_doc(|d| d.events_for(id)[0].event_type == "dblclick"));
}

#[tokio::test(start_paused = true)]
async fn test_right_click_and_hover_event_types() {
    let mut doc = PageDocument::new("t", "https://example.com");
    let id = doc.append_element(None, button("Menu"));
    let session = PageSession::new(doc);

    right_click(
        &session,
        TextTargetParams {
            text: "Menu".to_string(),
        },
    )
    .await
    .unwrap();
    hover_element(
        &session,
        TextTargetParams {
            text: "Menu".to_string(),
        },
    )
    .await
    .unwrap();

    let types: Vec<String> = session.with_doc(|d| {
        d.events_for(id)
            .iter()
            .map(|e| e.event_type.clone())
            .collect()
    });
    assert_eq!(types, vec!["contextmenu", "mouseover"]);
}

#[tokio::test(start_paused = true)]
async fn test_mouse_click_button_mapping() {
    let doc = PageDocument::new("t", "https://example.com");
    let session = PageSession::new(doc);

    mouse_click(
        &session,
        MouseClickParams {
            x: 5.0,
            y: 6.0,
            button: "right".to_string(),
        },
    )
    .await
    .unwrap();

    session.with_doc(|d| {
        let event = &d.events()[0];
        assert_eq!(event.target, None);
        assert_eq!(
            event.detail,
            crate::dom::EventDetail::Mouse {
                x: 5.0,
                y: 6.0,
                button: 2
            }
        );
    });
}

#[tokio::test(start_paused = true)]
async fn test_mouse_move_message() {
    let doc = PageDocument::new("t", "https://example.com");
    let session = PageSession::new(doc);
    let result = mouse_move(&session, MouseMoveParams { x: 10.0, y: 20.0 })
        .await
        .unwrap();
    assert_eq!(
        serde_json::to_value(&result).unwrap()["message"],
        "Mouse moved to (10, 20)"
    );
}
