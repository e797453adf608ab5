//! Action executors, one per verb.
//!
//! Every executor resolves its target, gates on interactability where the
//! verb calls for it, performs the document mutation or event sequence, and
//! returns the result envelope. Failures are data, never panics; anything an
//! executor cannot express as a typed error becomes one at the dispatcher.

mod form;
mod input;
mod page;
mod pointer;
mod transfer;

pub use form::{batch_click, fill_form, smart_fill_form};
pub use input::{
    clear_field, copy_text, key_combination, key_press, paste_text, select_all, type_text,
};
pub use page::{
    debug_elements, extract_data, find_element, get_element_info, get_page_info,
    highlight_elements, scroll_page, take_screenshot, wait_for_element,
};
pub use pointer::{click_element, double_click, hover_element, mouse_click, mouse_move, right_click};
pub use transfer::{drag_drop, enhanced_drag_drop, simulate_file_upload, upload_file};

use webgrip_protocols::{ElementInfo, ElementRect};

use crate::dom::{NodeId, PageDocument};
use crate::resolve::{Resolver, TextMatcher};
use crate::session::PageSession;

/// Resolver configured from the session's policy.
pub(crate) fn resolver(session: &PageSession) -> Resolver {
    Resolver::new(TextMatcher::new(session.policy().fuzzy_threshold))
}

/// Truncate to at most `max` characters, for report payloads.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Reported metadata for a resolved element.
pub(crate) fn element_info(doc: &PageDocument, id: NodeId) -> ElementInfo {
    let node = doc.node(id);
    ElementInfo {
        tag_name: node.tag_upper(),
        text: Some(truncate(&doc.text_content(id), 50)),
        position: ElementRect {
            x: node.bounds.x,
            y: node.bounds.y,
            width: node.bounds.width,
            height: node.bounds.height,
        },
    }
}
