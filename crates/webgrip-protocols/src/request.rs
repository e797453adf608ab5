//! Inbound action requests.
//!
//! Every verb the dispatcher understands is a variant of [`ActionRequest`],
//! internally tagged on the `action` field. A payload whose `action` value
//! matches no variant fails to decode, which the dispatcher reports as the
//! canonical `Unknown action` error; adding a verb is therefore an
//! exhaustiveness-checked change, not a new branch in a string switch.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An action request as delivered over the message channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum ActionRequest {
    #[serde(rename = "clickElement")]
    ClickElement(ClickParams),
    #[serde(rename = "typeText")]
    TypeText(TypeTextParams),
    #[serde(rename = "scrollPage")]
    ScrollPage(ScrollParams),
    #[serde(rename = "getPageInfo")]
    GetPageInfo(EmptyParams),
    #[serde(rename = "findElement")]
    FindElement(FindElementParams),
    #[serde(rename = "mouseMove")]
    MouseMove(MouseMoveParams),
    #[serde(rename = "mouseClick")]
    MouseClick(MouseClickParams),
    #[serde(rename = "takeScreenshot")]
    TakeScreenshot(EmptyParams),
    #[serde(rename = "doubleClick")]
    DoubleClick(TextTargetParams),
    #[serde(rename = "rightClick")]
    RightClick(TextTargetParams),
    #[serde(rename = "hoverElement")]
    HoverElement(TextTargetParams),
    #[serde(rename = "clearField")]
    ClearField(ClearFieldParams),
    #[serde(rename = "selectAll")]
    SelectAll(EmptyParams),
    #[serde(rename = "copyText")]
    CopyText(EmptyParams),
    #[serde(rename = "pasteText")]
    PasteText(PasteTextParams),
    #[serde(rename = "dragDrop")]
    DragDrop(DragDropParams),
    #[serde(rename = "keyPress")]
    KeyPress(KeyPressParams),
    #[serde(rename = "keyCombination")]
    KeyCombination(KeyCombinationParams),
    #[serde(rename = "fillForm")]
    FillForm(FillFormParams),
    #[serde(rename = "extractData")]
    ExtractData(ExtractDataParams),
    #[serde(rename = "debugElements")]
    DebugElements(TextTargetParams),
    #[serde(rename = "waitForElement")]
    WaitForElement(WaitForElementParams),
    #[serde(rename = "batchClick")]
    BatchClick(BatchClickParams),
    #[serde(rename = "smartFillForm")]
    SmartFillForm(SmartFillFormParams),
    #[serde(rename = "highlightElements")]
    HighlightElements(HighlightElementsParams),
    #[serde(rename = "getElementInfo")]
    GetElementInfo(GetElementInfoParams),
    #[serde(rename = "uploadFile")]
    UploadFile(UploadFileParams),
    #[serde(rename = "enhancedDragDrop")]
    EnhancedDragDrop(EnhancedDragDropParams),
    #[serde(rename = "simulateFileUpload")]
    SimulateFileUpload(SimulateFileUploadParams),
}

impl ActionRequest {
    /// Every wire verb the dispatcher understands, in declaration order.
    pub const VERBS: [&'static str; 29] = [
        "clickElement",
        "typeText",
        "scrollPage",
        "getPageInfo",
        "findElement",
        "mouseMove",
        "mouseClick",
        "takeScreenshot",
        "doubleClick",
        "rightClick",
        "hoverElement",
        "clearField",
        "selectAll",
        "copyText",
        "pasteText",
        "dragDrop",
        "keyPress",
        "keyCombination",
        "fillForm",
        "extractData",
        "debugElements",
        "waitForElement",
        "batchClick",
        "smartFillForm",
        "highlightElements",
        "getElementInfo",
        "uploadFile",
        "enhancedDragDrop",
        "simulateFileUpload",
    ];

    /// Whether `verb` names a known action.
    pub fn is_known_verb(verb: &str) -> bool {
        Self::VERBS.contains(&verb)
    }

    /// Wire name of this request's verb.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::ClickElement(_) => "clickElement",
            Self::TypeText(_) => "typeText",
            Self::ScrollPage(_) => "scrollPage",
            Self::GetPageInfo(_) => "getPageInfo",
            Self::FindElement(_) => "findElement",
            Self::MouseMove(_) => "mouseMove",
            Self::MouseClick(_) => "mouseClick",
            Self::TakeScreenshot(_) => "takeScreenshot",
            Self::DoubleClick(_) => "doubleClick",
            Self::RightClick(_) => "rightClick",
            Self::HoverElement(_) => "hoverElement",
            Self::ClearField(_) => "clearField",
            Self::SelectAll(_) => "selectAll",
            Self::CopyText(_) => "copyText",
            Self::PasteText(_) => "pasteText",
            Self::DragDrop(_) => "dragDrop",
            Self::KeyPress(_) => "keyPress",
            Self::KeyCombination(_) => "keyCombination",
            Self::FillForm(_) => "fillForm",
            Self::ExtractData(_) => "extractData",
            Self::DebugElements(_) => "debugElements",
            Self::WaitForElement(_) => "waitForElement",
            Self::BatchClick(_) => "batchClick",
            Self::SmartFillForm(_) => "smartFillForm",
            Self::HighlightElements(_) => "highlightElements",
            Self::GetElementInfo(_) => "getElementInfo",
            Self::UploadFile(_) => "uploadFile",
            Self::EnhancedDragDrop(_) => "enhancedDragDrop",
            Self::SimulateFileUpload(_) => "simulateFileUpload",
        }
    }
}

/// Control-toggle requests, handled alongside but separately from actions.
///
/// The toggle is the pause/resume surface the user sees; it never touches the
/// page DOM, so it gets its own tiny request family instead of living in
/// [`ActionRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum ControlRequest {
    #[serde(rename = "showControlToggle")]
    Show,
    #[serde(rename = "hideControlToggle")]
    Hide,
    #[serde(rename = "getControlState")]
    GetState,
    #[serde(rename = "updateControlState")]
    UpdateState { active: bool },
}

impl ControlRequest {
    /// Every wire verb of the control family.
    pub const VERBS: [&'static str; 4] = [
        "showControlToggle",
        "hideControlToggle",
        "getControlState",
        "updateControlState",
    ];

    /// Whether `verb` names a control request.
    pub fn is_known_verb(verb: &str) -> bool {
        Self::VERBS.contains(&verb)
    }
}

/// Placeholder for verbs that take no parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmptyParams {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickParams {
    #[serde(default)]
    pub selector: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub element_type: Option<String>,
    #[serde(default = "default_true")]
    pub wait_for_visible: bool,
    #[serde(default = "default_true")]
    pub highlight: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeTextParams {
    pub selector: String,
    pub text: String,
    #[serde(default)]
    pub clear: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollParams {
    /// One of up/down/left/right/top/bottom; anything else is a
    /// validation error, not a no-op.
    pub direction: String,
    #[serde(default)]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindElementParams {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MouseMoveParams {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MouseClickParams {
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_button")]
    pub button: String,
}

/// Target described by free text only (doubleClick, rightClick, hover, debug).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextTargetParams {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearFieldParams {
    pub selector: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasteTextParams {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DragDropParams {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyPressParams {
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyCombinationParams {
    /// Plus-separated key names, e.g. `Ctrl+Shift+T`.
    pub keys: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillFormParams {
    pub fields: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractDataParams {
    /// One of text/links/images/forms/tables/all.
    pub data_type: String,
    #[serde(default)]
    pub selector: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitForElementParams {
    #[serde(default)]
    pub selector: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    /// Milliseconds before giving up.
    #[serde(default = "default_wait_timeout")]
    pub timeout: u64,
    /// Poll interval in milliseconds.
    #[serde(default = "default_wait_interval")]
    pub interval: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchTarget {
    #[serde(default)]
    pub selector: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub element_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchClickParams {
    pub elements: Vec<BatchTarget>,
    /// Milliseconds between clicks.
    #[serde(default = "default_batch_delay")]
    pub delay: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartFillFormParams {
    pub fields: BTreeMap<String, String>,
    #[serde(default)]
    pub form_selector: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightElementsParams {
    #[serde(default)]
    pub selectors: Option<Vec<String>>,
    #[serde(default)]
    pub text_queries: Option<Vec<String>>,
    /// Milliseconds before the original style is restored.
    #[serde(default = "default_highlight_duration")]
    pub duration: u64,
    #[serde(default = "default_highlight_color")]
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetElementInfoParams {
    #[serde(default)]
    pub selector: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadFileParams {
    #[serde(default)]
    pub selector: Option<String>,
    /// Raw payloads: base64 data URLs or plain text, one per file.
    #[serde(default)]
    pub file_data: Option<Vec<String>>,
    #[serde(default)]
    pub file_names: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedDragDropParams {
    pub source: String,
    pub target: String,
    /// Plain-text file payloads carried in the transfer.
    #[serde(default)]
    pub files: Option<Vec<String>>,
    /// Highlight duration for the visual feedback, in milliseconds.
    #[serde(default = "default_drag_duration")]
    pub duration: u64,
    #[serde(default = "default_true")]
    pub visual_feedback: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateFileUploadParams {
    #[serde(default)]
    pub target_selector: Option<String>,
    #[serde(default)]
    pub file_data: Option<Vec<String>>,
    #[serde(default)]
    pub file_names: Option<Vec<String>>,
}

fn default_true() -> bool {
    true
}

fn default_button() -> String {
    "left".to_string()
}

fn default_wait_timeout() -> u64 {
    10_000
}

fn default_wait_interval() -> u64 {
    500
}

fn default_batch_delay() -> u64 {
    1_000
}

fn default_highlight_duration() -> u64 {
    3_000
}

fn default_highlight_color() -> String {
    "red".to_string()
}

fn default_drag_duration() -> u64 {
    1_000
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
