//! Engine timing and tuning knobs.
//!
//! Every delay and threshold the executors use lives here so embedders (and
//! tests) can tune them in one place instead of chasing literals.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct EnginePolicy {
    /// Minimum fraction of search tokens the fuzzy matcher must cover.
    pub fuzzy_threshold: f64,
    /// Pause after scrolling an element into view, letting the page settle.
    pub settle: Duration,
    /// How long the click highlight stays on.
    pub click_highlight: Duration,
    /// Highlight duration for upload drop targets.
    pub upload_highlight: Duration,
    /// Gap between keydown and keyup of a single key press.
    pub key_gap: Duration,
    /// Gap between the keys of a combination.
    pub combo_gap: Duration,
    /// Gap between the phases of a simple drag.
    pub drag_gap: Duration,
    /// Pause after dragstart in the enhanced drag sequence.
    pub drag_start_settle: Duration,
    /// Pause after dragenter.
    pub drag_enter_gap: Duration,
    /// Pause after dragover.
    pub drag_over_gap: Duration,
    /// Pause between drop and dragend.
    pub drag_drop_gap: Duration,
    /// Pause before the drop event in a simulated file drop.
    pub sim_drop_gap: Duration,
    /// Pixels one scroll step moves by default.
    pub scroll_step: f64,
}

impl Default for EnginePolicy {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 0.5,
            settle: Duration::from_millis(500),
            click_highlight: Duration::from_millis(2000),
            upload_highlight: Duration::from_millis(2000),
            key_gap: Duration::from_millis(50),
            combo_gap: Duration::from_millis(100),
            drag_gap: Duration::from_millis(100),
            drag_start_settle: Duration::from_millis(500),
            drag_enter_gap: Duration::from_millis(300),
            drag_over_gap: Duration::from_millis(200),
            drag_drop_gap: Duration::from_millis(100),
            sim_drop_gap: Duration::from_millis(200),
            scroll_step: 300.0,
        }
    }
}
