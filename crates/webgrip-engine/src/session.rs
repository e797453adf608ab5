//! Shared page session state.
//!
//! A `PageSession` is the handle executors run against: the document behind a
//! lock, highlight bookkeeping, the session clipboard, and the in-page
//! control toggle. Sessions are cheap to clone; clones share state.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use crate::dom::{NodeId, PageDocument};
use crate::policy::EnginePolicy;

/// Highlight styles applied as inline CSS, mirroring the visual feedback the
/// page overlay renders.
pub const SIMPLE_HIGHLIGHT: &str =
    "border: 2px solid red !important; background-color: yellow !important;";

/// Colored highlight used by highlightElements and the drag feedback.
pub fn colored_highlight(color: &str) -> String {
    format!(
        "border: 3px solid {color} !important; \
         background-color: rgba(255, 255, 0, 0.3) !important; \
         box-shadow: 0 0 10px {color} !important;"
    )
}

/// Bookkeeping for one highlighted element.
#[derive(Debug, Clone)]
struct HighlightState {
    /// Inline style from before the first highlight; what restore puts back.
    original: String,
    /// Monotonic counter; only the timer holding the latest value restores.
    generation: u64,
}

/// State of the in-page control toggle.
#[derive(Debug, Clone, Default)]
pub struct ControlToggle {
    pub active: bool,
}

#[derive(Debug, Default)]
struct SessionState {
    highlights: HashMap<NodeId, HighlightState>,
    next_generation: u64,
    clipboard: String,
    toggle: Option<ControlToggle>,
}

#[derive(Debug, Clone)]
pub struct PageSession {
    doc: Arc<Mutex<PageDocument>>,
    state: Arc<Mutex<SessionState>>,
    policy: Arc<EnginePolicy>,
}

impl PageSession {
    pub fn new(doc: PageDocument) -> Self {
        Self::with_policy(doc, EnginePolicy::default())
    }

    pub fn with_policy(doc: PageDocument, policy: EnginePolicy) -> Self {
        Self {
            doc: Arc::new(Mutex::new(doc)),
            state: Arc::new(Mutex::new(SessionState::default())),
            policy: Arc::new(policy),
        }
    }

    pub fn policy(&self) -> &EnginePolicy {
        &self.policy
    }

    /// Run a closure with shared access to the document.
    pub fn with_doc<R>(&self, f: impl FnOnce(&PageDocument) -> R) -> R {
        f(&self.doc.lock())
    }

    /// Run a closure with exclusive access to the document.
    pub fn with_doc_mut<R>(&self, f: impl FnOnce(&mut PageDocument) -> R) -> R {
        f(&mut self.doc.lock())
    }

    // ------------------------------------------------------------------
    // Highlighting
    // ------------------------------------------------------------------

    /// Apply a highlight style and schedule restoration.
    ///
    /// Re-highlighting an already highlighted element keeps the snapshot from
    /// before the first highlight and extends the timer: only the most recent
    /// schedule restores, so the original style comes back exactly once.
    pub fn highlight(&self, id: NodeId, style: &str, duration: Duration) {
        let generation = {
            let mut doc = self.doc.lock();
            let mut state = self.state.lock();
            state.next_generation += 1;
            let generation = state.next_generation;
            let node = doc.node_mut(id);
            state
                .highlights
                .entry(id)
                .and_modify(|h| h.generation = generation)
                .or_insert_with(|| HighlightState {
                    original: node.inline_style.clone(),
                    generation,
                });
            node.inline_style = style.to_string();
            generation
        };

        let session = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            session.restore_highlight(id, generation);
        });
    }

    fn restore_highlight(&self, id: NodeId, generation: u64) {
        let mut doc = self.doc.lock();
        let mut state = self.state.lock();
        let current = state
            .highlights
            .get(&id)
            .is_some_and(|h| h.generation == generation);
        if current {
            if let Some(h) = state.highlights.remove(&id) {
                doc.node_mut(id).inline_style = h.original;
            }
        } else {
            debug!(node = id.0, "stale highlight timer, skipping restore");
        }
    }

    /// Whether an element currently carries a highlight.
    pub fn is_highlighted(&self, id: NodeId) -> bool {
        self.state.lock().highlights.contains_key(&id)
    }

    // ------------------------------------------------------------------
    // Clipboard
    // ------------------------------------------------------------------

    pub fn clipboard(&self) -> String {
        self.state.lock().clipboard.clone()
    }

    pub fn set_clipboard(&self, text: impl Into<String>) {
        self.state.lock().clipboard = text.into();
    }

    // ------------------------------------------------------------------
    // Control toggle
    // ------------------------------------------------------------------

    /// Show the toggle, creating it on first use. Idempotent.
    pub fn show_toggle(&self) {
        let mut state = self.state.lock();
        if state.toggle.is_none() {
            state.toggle = Some(ControlToggle::default());
        }
    }

    /// Remove the toggle entirely. Idempotent.
    pub fn hide_toggle(&self) {
        self.state.lock().toggle = None;
    }

    /// Current toggle state; `None` when the toggle is not shown.
    pub fn toggle_state(&self) -> Option<ControlToggle> {
        self.state.lock().toggle.clone()
    }

    /// Set the active flag, creating the toggle if needed.
    pub fn set_toggle_active(&self, active: bool) {
        let mut state = self.state.lock();
        match state.toggle.as_mut() {
            Some(toggle) => toggle.active = active,
            None => state.toggle = Some(ControlToggle { active }),
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
