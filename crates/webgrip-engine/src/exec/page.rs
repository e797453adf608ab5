//! Page-level executors: scrolling, introspection, extraction, waiting.

use serde_json::{Value, json};
use tokio::time::Instant;
use webgrip_protocols::{
    ActionError, ActionResult, ExtractDataParams, FindElementParams, GetElementInfoParams,
    HighlightElementsParams, ScrollParams, TextTargetParams, WaitForElementParams,
};

use crate::dom::PageDocument;
use crate::resolve::{Locator, is_interactable};
use crate::session::{PageSession, colored_highlight};

use super::{element_info, resolver, truncate};

/// Scroll the page in one of six fixed directions.
pub async fn scroll_page(
    session: &PageSession,
    params: ScrollParams,
) -> Result<ActionResult, ActionError> {
    let amount = params.amount.unwrap_or(session.policy().scroll_step);
    session.with_doc_mut(|doc| match params.direction.as_str() {
        "up" => Ok(doc.scroll_by(0.0, -amount)),
        "down" => Ok(doc.scroll_by(0.0, amount)),
        "left" => Ok(doc.scroll_by(-amount, 0.0)),
        "right" => Ok(doc.scroll_by(amount, 0.0)),
        "top" => Ok(doc.scroll_to(0.0, 0.0)),
        "bottom" => Ok(doc.scroll_to(0.0, doc.scroll_height())),
        _ => Err(ActionError::Validation("Invalid scroll direction".to_string())),
    })?;
    Ok(ActionResult::success(format!("Scrolled {}", params.direction)))
}

/// Summarize the page: title, location, element counts, viewport.
pub async fn get_page_info(session: &PageSession) -> Result<ActionResult, ActionError> {
    let data = session.with_doc(|doc| {
        json!({
            "title": doc.title(),
            "url": doc.url(),
            "domain": doc.hostname(),
            "elements": {
                "links": doc.query_selector_all("a").len(),
                "buttons": doc.query_selector_all("button").len(),
                "inputs": doc.query_selector_all("input").len(),
                "images": doc.query_selector_all("img").len(),
            },
            "viewport": {
                "width": doc.viewport().width,
                "height": doc.viewport().height,
            },
        })
    });
    Ok(ActionResult::success_data(data))
}

/// Basic-mode screenshot: no pixel capture, just page identity and viewport.
pub async fn take_screenshot(session: &PageSession) -> Result<ActionResult, ActionError> {
    let data = session.with_doc(|doc| {
        json!({
            "title": doc.title(),
            "url": doc.url(),
            "viewport": {
                "width": doc.viewport().width,
                "height": doc.viewport().height,
            },
        })
    });
    Ok(ActionResult::success("Screenshot taken (basic mode)").with_data(data))
}

/// Legacy substring-based element lookup, reporting geometry.
pub async fn find_element(
    session: &PageSession,
    params: FindElementParams,
) -> Result<ActionResult, ActionError> {
    session.with_doc(|doc| {
        let Some(id) = resolver(session).find_by_text_contains(doc, &params.text) else {
            return Err(ActionError::Validation(format!(
                "Element with text \"{}\" not found",
                params.text
            )));
        };
        let node = doc.node(id);
        Ok(ActionResult::success_data(json!({
            "tagName": node.tag_upper(),
            "text": doc.text_content(id),
            "position": { "x": node.bounds.x, "y": node.bounds.y },
            "size": { "width": node.bounds.width, "height": node.bounds.height },
        })))
    })
}

/// Extract structured data from the page in one of six modes.
pub async fn extract_data(
    session: &PageSession,
    params: ExtractDataParams,
) -> Result<ActionResult, ActionError> {
    session.with_doc(|doc| {
        let data = match params.data_type.as_str() {
            "text" => json!({ "text": extract_text(doc, params.selector.as_deref()) }),
            "links" => json!({ "links": extract_links(doc) }),
            "images" => json!({ "images": extract_images(doc) }),
            "forms" => json!({ "forms": extract_forms(doc) }),
            "tables" => json!({ "tables": extract_tables(doc) }),
            "all" => json!({
                "title": doc.title(),
                "url": doc.url(),
                "text": whole_page_text(doc),
                "links": extract_links(doc),
                "images": extract_images(doc),
            }),
            _ => return Err(ActionError::Validation("Invalid data type".to_string())),
        };
        Ok(ActionResult::success_data(data))
    })
}

fn extract_text(doc: &PageDocument, selector: Option<&str>) -> Value {
    match selector {
        Some(selector) => {
            let texts: Vec<String> = doc
                .query_selector_all(selector)
                .into_iter()
                .map(|id| doc.text_content(id))
                .collect();
            json!(texts)
        }
        None => json!(whole_page_text(doc)),
    }
}

fn whole_page_text(doc: &PageDocument) -> String {
    let roots: Vec<String> = doc
        .all_ids()
        .filter(|&id| doc.node(id).parent.is_none())
        .map(|id| doc.text_content(id))
        .filter(|t| !t.is_empty())
        .collect();
    roots.join(" ")
}

fn extract_links(doc: &PageDocument) -> Vec<Value> {
    doc.query_selector_all("a[href]")
        .into_iter()
        .map(|id| {
            let node = doc.node(id);
            json!({
                "text": doc.text_content(id),
                "href": node.attrs.get("href").unwrap_or_default(),
            })
        })
        .collect()
}

fn extract_images(doc: &PageDocument) -> Vec<Value> {
    doc.query_selector_all("img[src]")
        .into_iter()
        .map(|id| {
            let node = doc.node(id);
            json!({
                "src": node.attrs.get("src").unwrap_or_default(),
                "alt": node.attrs.get("alt").unwrap_or_default(),
                "title": node.attrs.get("title").unwrap_or_default(),
            })
        })
        .collect()
}

fn extract_forms(doc: &PageDocument) -> Vec<Value> {
    doc.query_selector_all("form")
        .into_iter()
        .map(|form| {
            let node = doc.node(form);
            let fields: Vec<Value> = doc
                .query_within(Some(form), "input, textarea, select")
                .into_iter()
                .map(|id| {
                    let field = doc.node(id);
                    json!({
                        "name": field.attrs.get("name").unwrap_or_default(),
                        "type": field.attrs.get("type").unwrap_or_default(),
                        "placeholder": field.attrs.get("placeholder").unwrap_or_default(),
                        "value": field.value,
                    })
                })
                .collect();
            json!({
                "action": node.attrs.get("action").unwrap_or_default(),
                "method": node.attrs.get("method").unwrap_or_default(),
                "fields": fields,
            })
        })
        .collect()
}

fn extract_tables(doc: &PageDocument) -> Vec<Value> {
    doc.query_selector_all("table")
        .into_iter()
        .map(|table| {
            let rows: Vec<Value> = doc
                .query_within(Some(table), "tr")
                .into_iter()
                .map(|row| {
                    let cells: Vec<String> = doc
                        .query_within(Some(row), "td, th")
                        .into_iter()
                        .map(|cell| doc.text_content(cell))
                        .collect();
                    json!(cells)
                })
                .collect();
            json!(rows)
        })
        .collect()
}

/// List every element whose text contains the search string, for diagnosing
/// failed resolutions.
pub async fn debug_elements(
    session: &PageSession,
    params: TextTargetParams,
) -> Result<ActionResult, ActionError> {
    let search = params.text.to_lowercase().trim().to_string();
    let data = session.with_doc(|doc| {
        let matches: Vec<Value> = doc
            .all_ids()
            .filter(|&id| doc.text_content(id).to_lowercase().contains(&search))
            .map(|id| {
                let node = doc.node(id);
                json!({
                    "tagName": node.tag_upper(),
                    "text": truncate(&doc.text_content(id), 100),
                    "id": node.attrs.get("id").unwrap_or_default(),
                    "className": node.attrs.get("class").unwrap_or_default(),
                    "position": { "x": node.bounds.x, "y": node.bounds.y },
                    "size": { "width": node.bounds.width, "height": node.bounds.height },
                    "visible": !node.bounds.is_empty(),
                })
            })
            .collect();
        json!({
            "searchText": search,
            "totalMatches": matches.len(),
            "matches": matches.into_iter().take(10).collect::<Vec<_>>(),
        })
    });
    Ok(ActionResult::success_data(data))
}

/// Poll for an element until it resolves and is interactable, or time out.
pub async fn wait_for_element(
    session: &PageSession,
    params: WaitForElementParams,
) -> Result<ActionResult, ActionError> {
    let locator = Locator {
        selector: params.selector.clone(),
        text: params.text.clone(),
        element_type: None,
    };
    let start = Instant::now();
    loop {
        let found = session.with_doc(|doc| {
            resolver(session)
                .resolve(doc, &locator)
                .filter(|&id| is_interactable(doc, id))
                .map(|id| element_info(doc, id))
        });
        if let Some(info) = found {
            let elapsed = start.elapsed().as_millis();
            return Ok(
                ActionResult::success(format!("Element found after {elapsed}ms"))
                    .with_element_info(info),
            );
        }
        if start.elapsed().as_millis() > u128::from(params.timeout) {
            return Err(ActionError::Timeout(params.timeout));
        }
        tokio::time::sleep(std::time::Duration::from_millis(params.interval)).await;
    }
}

/// Highlight every element named by selector or text query.
pub async fn highlight_elements(
    session: &PageSession,
    params: HighlightElementsParams,
) -> Result<ActionResult, ActionError> {
    let duration = std::time::Duration::from_millis(params.duration);
    let style = colored_highlight(&params.color);
    let mut highlighted = Vec::new();

    if let Some(selectors) = &params.selectors {
        for selector in selectors {
            let ids = session.with_doc(|doc| doc.query_selector_all(selector));
            for id in ids {
                session.highlight(id, &style, duration);
                let entry = session.with_doc(|doc| {
                    json!({
                        "selector": selector,
                        "tagName": doc.node(id).tag_upper(),
                        "text": truncate(&doc.text_content(id), 30),
                    })
                });
                highlighted.push(entry);
            }
        }
    }

    if let Some(queries) = &params.text_queries {
        for query in queries {
            let found = session.with_doc(|doc| resolver(session).resolve_text(doc, query, None));
            if let Some(id) = found {
                session.highlight(id, &style, duration);
                let entry = session.with_doc(|doc| {
                    json!({
                        "textQuery": query,
                        "tagName": doc.node(id).tag_upper(),
                        "text": truncate(&doc.text_content(id), 30),
                    })
                });
                highlighted.push(entry);
            }
        }
    }

    let count = highlighted.len();
    Ok(
        ActionResult::success(format!("Highlighted {count} elements"))
            .with_field("highlightedElements", json!(highlighted)),
    )
}

/// Full introspection report for one element.
pub async fn get_element_info(
    session: &PageSession,
    params: GetElementInfoParams,
) -> Result<ActionResult, ActionError> {
    let locator = Locator {
        selector: params.selector.clone(),
        text: params.text.clone(),
        element_type: None,
    };
    let target = locator.describe();
    session.with_doc(|doc| {
        let Some(id) = resolver(session).resolve(doc, &locator) else {
            return Err(ActionError::NotFound(target));
        };
        let node = doc.node(id);
        let form_info = if node.is_form_field() && node.tag != "select" {
            json!({
                "type": node.attrs.get("type").unwrap_or_default(),
                "name": node.attrs.get("name").unwrap_or_default(),
                "placeholder": node.attrs.get("placeholder").unwrap_or_default(),
                "value": node.value,
                "required": node.attrs.get("required").is_some(),
            })
        } else {
            Value::Null
        };
        Ok(ActionResult::success_data(json!({
            "tagName": node.tag_upper(),
            "id": node.attrs.get("id").unwrap_or_default(),
            "className": node.attrs.get("class").unwrap_or_default(),
            "textContent": truncate(&doc.text_content(id), 100),
            "position": {
                "x": node.bounds.x,
                "y": node.bounds.y,
                "width": node.bounds.width,
                "height": node.bounds.height,
            },
            "visible": !node.bounds.is_empty(),
            "display": node.style.display,
            "visibility": node.style.visibility,
            "opacity": node.style.opacity,
            "disabled": node.disabled,
            "interactable": is_interactable(doc, id),
            "attributes": node.attrs.to_map(),
            "formInfo": form_info,
        })))
    })
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
