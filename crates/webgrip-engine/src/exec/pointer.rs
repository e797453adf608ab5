//! Pointer-driven executors: clicks, hovers, and raw mouse events.

use tracing::info;
use webgrip_protocols::{
    ActionError, ActionResult, ClickParams, MouseClickParams, MouseMoveParams, TextTargetParams,
};

use crate::dom::EventDetail;
use crate::resolve::{Locator, is_interactable, suggestion_lines};
use crate::session::{PageSession, SIMPLE_HIGHLIGHT};

use super::{element_info, resolver};

/// Click an element located by selector or free text.
pub async fn click_element(
    session: &PageSession,
    params: ClickParams,
) -> Result<ActionResult, ActionError> {
    let locator = Locator {
        selector: params.selector.clone(),
        text: params.text.clone(),
        element_type: params.element_type.clone(),
    };
    if locator.selector.is_none() && locator.text.is_none() {
        return Err(ActionError::Validation(
            "No selector or text provided".to_string(),
        ));
    }
    let target = locator.describe();

    let resolved = session.with_doc(|doc| resolver(session).resolve(doc, &locator));
    let Some(id) = resolved else {
        let suggestions = session.with_doc(|doc| suggestion_lines(doc, &target));
        return Ok(ActionResult::error_with_suggestions(
            format!("Element not found: {target}"),
            suggestions,
        ));
    };

    if params.wait_for_visible && !session.with_doc(|doc| is_interactable(doc, id)) {
        return Err(ActionError::NotInteractable(target));
    }

    if params.highlight {
        session.highlight(id, SIMPLE_HIGHLIGHT, session.policy().click_highlight);
    }

    session.with_doc_mut(|doc| doc.scroll_into_view(id));
    tokio::time::sleep(session.policy().settle).await;

    let info = session.with_doc_mut(|doc| {
        doc.dispatch(Some(id), "click", EventDetail::None);
        element_info(doc, id)
    });
    info!(target = %target, "clicked element");
    Ok(ActionResult::success(format!("Clicked element: {target}")).with_element_info(info))
}

/// Double-click an element located by free text.
pub async fn double_click(
    session: &PageSession,
    params: TextTargetParams,
) -> Result<ActionResult, ActionError> {
    text_event(session, params, "dblclick", "Double-clicked").await
}

/// Right-click (context menu) an element located by free text.
pub async fn right_click(
    session: &PageSession,
    params: TextTargetParams,
) -> Result<ActionResult, ActionError> {
    text_event(session, params, "contextmenu", "Right-clicked").await
}

/// Hover over an element located by free text.
pub async fn hover_element(
    session: &PageSession,
    params: TextTargetParams,
) -> Result<ActionResult, ActionError> {
    text_event(session, params, "mouseover", "Hovered over").await
}

/// Shared scroll-settle-dispatch sequence for the text-target pointer verbs.
async fn text_event(
    session: &PageSession,
    params: TextTargetParams,
    event_type: &str,
    verb_past: &str,
) -> Result<ActionResult, ActionError> {
    let resolved =
        session.with_doc(|doc| resolver(session).resolve_text(doc, &params.text, None));
    let Some(id) = resolved else {
        return Err(ActionError::NotFound(params.text));
    };

    session.with_doc_mut(|doc| doc.scroll_into_view(id));
    tokio::time::sleep(session.policy().settle).await;

    session.with_doc_mut(|doc| doc.dispatch(Some(id), event_type, EventDetail::None));
    Ok(ActionResult::success(format!("{verb_past}: {}", params.text)))
}

/// Dispatch a document-level mouse move.
pub async fn mouse_move(
    session: &PageSession,
    params: MouseMoveParams,
) -> Result<ActionResult, ActionError> {
    session.with_doc_mut(|doc| {
        doc.dispatch(
            None,
            "mousemove",
            EventDetail::Mouse {
                x: params.x,
                y: params.y,
                button: 0,
            },
        )
    });
    Ok(ActionResult::success(format!(
        "Mouse moved to ({}, {})",
        params.x, params.y
    )))
}

/// Dispatch a document-level click at coordinates.
pub async fn mouse_click(
    session: &PageSession,
    params: MouseClickParams,
) -> Result<ActionResult, ActionError> {
    let button = if params.button == "right" { 2 } else { 0 };
    session.with_doc_mut(|doc| {
        doc.dispatch(
            None,
            "click",
            EventDetail::Mouse {
                x: params.x,
                y: params.y,
                button,
            },
        )
    });
    Ok(ActionResult::success(format!(
        "Mouse clicked at ({}, {})",
        params.x, params.y
    )))
}

#[cfg(test)]
#[path = "pointer_tests.rs"]
mod tests;
