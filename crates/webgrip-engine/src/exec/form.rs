//! Multi-item executors: form filling and batch clicking.
//!
//! These never fail atomically. Every item is attempted independently and
//! the result carries a success count plus a per-item error list.

use serde_json::json;
use tracing::warn;
use webgrip_protocols::{
    ActionError, ActionResult, BatchClickParams, FillFormParams, SmartFillFormParams,
};

use crate::dom::{EventDetail, NodeId, PageDocument};
use crate::resolve::is_interactable;
use crate::session::PageSession;

use super::resolver;

/// Fill form fields by name, trying a fixed list of selector strategies per
/// field.
pub async fn fill_form(
    session: &PageSession,
    params: FillFormParams,
) -> Result<ActionResult, ActionError> {
    let mut filled = 0usize;
    let mut errors = Vec::new();

    session.with_doc_mut(|doc| {
        for (name, value) in &params.fields {
            let selectors = [
                format!("input[name=\"{name}\"]"),
                format!("input[id=\"{name}\"]"),
                format!("input[placeholder*=\"{name}\"]"),
                format!("textarea[name=\"{name}\"]"),
                format!("textarea[id=\"{name}\"]"),
                format!("select[name=\"{name}\"]"),
                format!("select[id=\"{name}\"]"),
            ];
            match first_match(doc, None, &selectors) {
                Some(id) => {
                    set_field(doc, id, value, false);
                    filled += 1;
                }
                None => {
                    warn!(field = %name, "form field not found");
                    errors.push(format!("Field \"{name}\" not found"));
                }
            }
        }
    });

    let mut result = ActionResult::success(format!("Filled {filled} form fields"))
        .with_field("filledCount", json!(filled));
    if !errors.is_empty() {
        result = result.with_field("errors", json!(errors));
    }
    Ok(result)
}

/// Smarter form filling: wider selector strategies, optional container
/// scoping, and an interactability gate per candidate.
pub async fn smart_fill_form(
    session: &PageSession,
    params: SmartFillFormParams,
) -> Result<ActionResult, ActionError> {
    let mut filled = 0usize;
    let mut errors = Vec::new();

    session.with_doc_mut(|doc| {
        let root = match &params.form_selector {
            Some(selector) => match doc.query_selector(selector) {
                Some(id) => Some(id),
                None => {
                    return Err(ActionError::Validation(format!(
                        "Form container not found: {selector}"
                    )));
                }
            },
            None => None,
        };

        for (name, value) in &params.fields {
            let lower = name.to_lowercase();
            let mut selectors = vec![
                format!("input[name=\"{name}\"]"),
                format!("input[id=\"{name}\"]"),
                format!("textarea[name=\"{name}\"]"),
                format!("textarea[id=\"{name}\"]"),
                format!("select[name=\"{name}\"]"),
                format!("select[id=\"{name}\"]"),
                format!("input[placeholder*=\"{name}\"]"),
                format!("textarea[placeholder*=\"{name}\"]"),
                format!("input[id=\"{lower}\"]"),
                format!("textarea[id=\"{lower}\"]"),
            ];
            if lower.contains("email") {
                selectors.push("input[type=\"email\"]".to_string());
            }
            if lower.contains("password") {
                selectors.push("input[type=\"password\"]".to_string());
            }
            if lower.contains("phone") {
                selectors.push("input[type=\"tel\"]".to_string());
            }
            if lower.contains("name") {
                selectors.push("input[type=\"text\"]".to_string());
            }
            selectors.push(format!("input[data-field=\"{name}\"]"));
            selectors.push(format!("input[data-name=\"{name}\"]"));

            let found = selectors.iter().find_map(|selector| {
                doc.query_within(root, selector)
                    .into_iter()
                    .find(|&id| !doc.node(id).disabled && is_interactable(doc, id))
            });
            match found {
                Some(id) => {
                    set_field(doc, id, value, true);
                    filled += 1;
                }
                None => errors.push(format!("Field \"{name}\" not found")),
            }
        }
        Ok(())
    })?;

    let mut result = ActionResult::success(format!("Smart filled {filled} form fields"))
        .with_field("filledCount", json!(filled));
    if !errors.is_empty() {
        result = result.with_field("errors", json!(errors));
    }
    Ok(result)
}

fn first_match(doc: &PageDocument, root: Option<NodeId>, selectors: &[String]) -> Option<NodeId> {
    selectors
        .iter()
        .find_map(|selector| doc.query_within(root, selector).into_iter().next())
}

fn set_field(doc: &mut PageDocument, id: NodeId, value: &str, blur: bool) {
    doc.focus(id);
    doc.node_mut(id).value = value.to_string();
    doc.dispatch(Some(id), "input", EventDetail::None);
    doc.dispatch(Some(id), "change", EventDetail::None);
    if blur {
        doc.dispatch(Some(id), "blur", EventDetail::None);
    }
}

/// Click a list of targets sequentially, continuing past failures.
pub async fn batch_click(
    session: &PageSession,
    params: BatchClickParams,
) -> Result<ActionResult, ActionError> {
    let delay = std::time::Duration::from_millis(params.delay);
    let mut clicked = 0usize;
    let mut errors = Vec::new();

    for (index, target) in params.elements.iter().enumerate() {
        let resolved = session.with_doc(|doc| {
            let id = if let Some(selector) = &target.selector {
                doc.query_selector(selector)
            } else if let Some(text) = &target.text {
                resolver(session).resolve_text(doc, text, target.element_type.as_deref())
            } else {
                None
            };
            id.filter(|&id| is_interactable(doc, id))
        });

        match resolved {
            Some(id) => {
                session.with_doc_mut(|doc| doc.scroll_into_view(id));
                tokio::time::sleep(session.policy().settle).await;
                session.with_doc_mut(|doc| doc.dispatch(Some(id), "click", EventDetail::None));
                clicked += 1;
            }
            None => {
                errors.push(format!(
                    "Element {} not found or not interactable",
                    index + 1
                ));
            }
        }
        tokio::time::sleep(delay).await;
    }

    let mut result = ActionResult::success(format!("Batch clicked {clicked} elements"))
        .with_field("clickedCount", json!(clicked));
    if !errors.is_empty() {
        result = result.with_field("errors", json!(errors));
    }
    Ok(result)
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
