//! Text entry, clipboard, and keyboard executors.

use webgrip_protocols::{
    ActionError, ActionResult, ClearFieldParams, KeyCombinationParams, KeyPressParams,
    PasteTextParams, TypeTextParams,
};

use crate::dom::EventDetail;
use crate::session::PageSession;

/// Legacy key-code table for the named keys; unrecognized keys fall back to
/// the code of their first character.
fn key_code(key: &str) -> u32 {
    match key {
        "Enter" => 13,
        "Escape" => 27,
        "Tab" => 9,
        "Space" => 32,
        "Backspace" => 8,
        "Delete" => 46,
        "ArrowUp" => 38,
        "ArrowDown" => 40,
        "ArrowLeft" => 37,
        "ArrowRight" => 39,
        "Ctrl" => 17,
        "Alt" => 18,
        "Shift" => 16,
        "Meta" => 91,
        _ => key.chars().next().map(|c| c as u32).unwrap_or(0),
    }
}

/// Type text into an editable element, optionally clearing it first.
///
/// Dispatches both input and change so framework-bound listeners observe the
/// new value; dispatching only one is a common silent-failure mode.
pub async fn type_text(
    session: &PageSession,
    params: TypeTextParams,
) -> Result<ActionResult, ActionError> {
    session.with_doc_mut(|doc| {
        let Some(id) = doc.query_selector(&params.selector) else {
            return Err(ActionError::Validation(format!(
                "Input element not found: {}",
                params.selector
            )));
        };
        if !doc.node(id).is_editable() {
            return Err(ActionError::Validation(format!(
                "Input element not found: {}",
                params.selector
            )));
        }

        doc.focus(id);
        let node = doc.node_mut(id);
        if params.clear {
            node.value.clear();
            if node.content_editable {
                node.text.clear();
            }
        }
        if node.content_editable {
            node.text = params.text.clone();
        } else {
            node.value = params.text.clone();
        }
        doc.dispatch(Some(id), "input", EventDetail::None);
        doc.dispatch(Some(id), "change", EventDetail::None);
        Ok(ActionResult::success(format!(
            "Typed \"{}\" into {}",
            params.text, params.selector
        )))
    })
}

/// Clear an input or textarea.
pub async fn clear_field(
    session: &PageSession,
    params: ClearFieldParams,
) -> Result<ActionResult, ActionError> {
    session.with_doc_mut(|doc| {
        let id = doc
            .query_selector(&params.selector)
            .filter(|&id| doc.node(id).is_form_field())
            .ok_or_else(|| {
                ActionError::Validation(format!("Input field not found: {}", params.selector))
            })?;

        doc.focus(id);
        doc.node_mut(id).value.clear();
        doc.dispatch(Some(id), "input", EventDetail::None);
        Ok(ActionResult::success(format!(
            "Cleared field: {}",
            params.selector
        )))
    })
}

/// Select all text on the page (or in the focused field).
pub async fn select_all(session: &PageSession) -> Result<ActionResult, ActionError> {
    session.with_doc_mut(|doc| doc.select_all());
    Ok(ActionResult::success("Selected all text"))
}

/// Copy the current selection to the session clipboard.
pub async fn copy_text(session: &PageSession) -> Result<ActionResult, ActionError> {
    let selected = session.with_doc(|doc| doc.selected_text());
    match selected {
        Some(text) => {
            session.set_clipboard(text);
            Ok(ActionResult::success("Text copied to clipboard"))
        }
        None => Err(ActionError::Internal("Failed to copy text".to_string())),
    }
}

/// Paste text into the focused input or textarea.
pub async fn paste_text(
    session: &PageSession,
    params: PasteTextParams,
) -> Result<ActionResult, ActionError> {
    session.with_doc_mut(|doc| {
        let active = doc.focused().filter(|&id| doc.node(id).is_form_field());
        let Some(id) = active else {
            return Err(ActionError::Validation("No active input field".to_string()));
        };
        doc.node_mut(id).value = params.text.clone();
        doc.dispatch(Some(id), "input", EventDetail::None);
        Ok(ActionResult::success(format!("Pasted: {}", params.text)))
    })
}

/// Press one key: keydown, a short gap, keyup.
pub async fn key_press(
    session: &PageSession,
    params: KeyPressParams,
) -> Result<ActionResult, ActionError> {
    let code = key_code(&params.key);
    session.with_doc_mut(|doc| {
        doc.dispatch(
            None,
            "keydown",
            EventDetail::Key {
                key: params.key.clone(),
                key_code: code,
            },
        )
    });
    tokio::time::sleep(session.policy().key_gap).await;
    session.with_doc_mut(|doc| {
        doc.dispatch(
            None,
            "keyup",
            EventDetail::Key {
                key: params.key.clone(),
                key_code: code,
            },
        )
    });
    Ok(ActionResult::success(format!("Pressed key: {}", params.key)))
}

/// Press a plus-separated key combination: all keydowns, a gap, all keyups.
pub async fn key_combination(
    session: &PageSession,
    params: KeyCombinationParams,
) -> Result<ActionResult, ActionError> {
    let keys: Vec<String> = params
        .keys
        .split('+')
        .map(|k| k.trim().to_string())
        .collect();

    session.with_doc_mut(|doc| {
        for key in &keys {
            doc.dispatch(
                None,
                "keydown",
                EventDetail::Key {
                    key: key.clone(),
                    key_code: key_code(key),
                },
            );
        }
    });
    tokio::time::sleep(session.policy().combo_gap).await;
    session.with_doc_mut(|doc| {
        for key in &keys {
            doc.dispatch(
                None,
                "keyup",
                EventDetail::Key {
                    key: key.clone(),
                    key_code: key_code(key),
                },
            );
        }
    });
    Ok(ActionResult::success(format!(
        "Pressed combination: {}",
        params.keys
    )))
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
