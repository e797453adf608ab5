//! Request routing.
//!
//! The dispatcher decodes an inbound payload, routes it to its executor, and
//! always resolves to an envelope. Nothing below this layer is allowed to
//! escape as a panic or an unstructured error; a caller that sends garbage
//! still gets `{ "error": ... }` back.

use serde_json::{Value, json};
use tracing::{debug, warn};
use webgrip_protocols::{ActionRequest, ActionResult, ControlRequest};

use crate::exec;
use crate::session::PageSession;

/// Route a decoded action request to its executor.
pub async fn dispatch(session: &PageSession, request: ActionRequest) -> ActionResult {
    debug!(action = request.verb(), "dispatching action");
    let outcome = match request {
        ActionRequest::ClickElement(p) => exec::click_element(session, p).await,
        ActionRequest::TypeText(p) => exec::type_text(session, p).await,
        ActionRequest::ScrollPage(p) => exec::scroll_page(session, p).await,
        ActionRequest::GetPageInfo(_) => exec::get_page_info(session).await,
        ActionRequest::FindElement(p) => exec::find_element(session, p).await,
        ActionRequest::MouseMove(p) => exec::mouse_move(session, p).await,
        ActionRequest::MouseClick(p) => exec::mouse_click(session, p).await,
        ActionRequest::TakeScreenshot(_) => exec::take_screenshot(session).await,
        ActionRequest::DoubleClick(p) => exec::double_click(session, p).await,
        ActionRequest::RightClick(p) => exec::right_click(session, p).await,
        ActionRequest::HoverElement(p) => exec::hover_element(session, p).await,
        ActionRequest::ClearField(p) => exec::clear_field(session, p).await,
        ActionRequest::SelectAll(_) => exec::select_all(session).await,
        ActionRequest::CopyText(_) => exec::copy_text(session).await,
        ActionRequest::PasteText(p) => exec::paste_text(session, p).await,
        ActionRequest::DragDrop(p) => exec::drag_drop(session, p).await,
        ActionRequest::KeyPress(p) => exec::key_press(session, p).await,
        ActionRequest::KeyCombination(p) => exec::key_combination(session, p).await,
        ActionRequest::FillForm(p) => exec::fill_form(session, p).await,
        ActionRequest::ExtractData(p) => exec::extract_data(session, p).await,
        ActionRequest::DebugElements(p) => exec::debug_elements(session, p).await,
        ActionRequest::WaitForElement(p) => exec::wait_for_element(session, p).await,
        ActionRequest::BatchClick(p) => exec::batch_click(session, p).await,
        ActionRequest::SmartFillForm(p) => exec::smart_fill_form(session, p).await,
        ActionRequest::HighlightElements(p) => exec::highlight_elements(session, p).await,
        ActionRequest::GetElementInfo(p) => exec::get_element_info(session, p).await,
        ActionRequest::UploadFile(p) => exec::upload_file(session, p).await,
        ActionRequest::EnhancedDragDrop(p) => exec::enhanced_drag_drop(session, p).await,
        ActionRequest::SimulateFileUpload(p) => exec::simulate_file_upload(session, p).await,
    };
    match outcome {
        Ok(result) => result,
        Err(err) => {
            warn!(error = %err, "action failed");
            err.into()
        }
    }
}

/// Decode a raw payload and dispatch it.
///
/// An unrecognized `action` yields the canonical `Unknown action` error; a
/// recognized action with malformed parameters yields a decode error instead,
/// so the caller can tell the two apart.
pub async fn dispatch_value(session: &PageSession, payload: Value) -> ActionResult {
    // Owned so the payload can be consumed by the decoder below.
    let verb = payload
        .get("action")
        .and_then(Value::as_str)
        .map(str::to_owned);
    match verb {
        Some(verb) if ActionRequest::is_known_verb(&verb) => {
            match serde_json::from_value::<ActionRequest>(payload) {
                Ok(request) => dispatch(session, request).await,
                Err(err) => ActionResult::error(format!("Invalid parameters for {verb}: {err}")),
            }
        }
        _ => ActionResult::error("Unknown action"),
    }
}

/// Handle a control-toggle request. These never touch the page document.
pub fn dispatch_control(session: &PageSession, request: ControlRequest) -> Value {
    match request {
        ControlRequest::Show => {
            session.show_toggle();
            json!({ "success": true })
        }
        ControlRequest::Hide => {
            session.hide_toggle();
            json!({ "success": true })
        }
        ControlRequest::GetState => {
            let active = session.toggle_state().map(|t| t.active).unwrap_or(false);
            json!({ "active": active })
        }
        ControlRequest::UpdateState { active } => {
            session.set_toggle_active(active);
            json!({ "success": true })
        }
    }
}

/// Handle any inbound payload, action or control, returning the raw response
/// value that goes back over the message channel.
pub async fn handle(session: &PageSession, payload: Value) -> Value {
    let verb = payload
        .get("action")
        .and_then(Value::as_str)
        .map(str::to_owned);
    if let Some(verb) = verb {
        if ControlRequest::is_known_verb(&verb) {
            return match serde_json::from_value::<ControlRequest>(payload) {
                Ok(request) => dispatch_control(session, request),
                Err(err) => json!({ "error": format!("Invalid parameters for {verb}: {err}") }),
            };
        }
    }
    let result = dispatch_value(session, payload).await;
    serde_json::to_value(&result).unwrap_or_else(|err| json!({ "error": err.to_string() }))
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
