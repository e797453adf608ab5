//! WebGrip wire contract.
//!
//! The protocol between the agent-facing relay and the page-side dispatcher
//! is a flat JSON object with a required `action` discriminant plus
//! verb-specific fields. Responses are always one of two envelope shapes:
//! `{ success: true, ... }` or `{ error: ..., suggestions?: ... }`, never
//! both. This crate owns those types so the relay and the engine agree on
//! them without depending on each other.

pub mod error;
pub mod request;
pub mod response;

pub use error::ActionError;
pub use request::{
    ActionRequest, BatchClickParams, BatchTarget, ClearFieldParams, ClickParams, ControlRequest,
    DragDropParams, EnhancedDragDropParams, ExtractDataParams, FillFormParams, FindElementParams,
    GetElementInfoParams, HighlightElementsParams, KeyCombinationParams, KeyPressParams,
    MouseClickParams, MouseMoveParams, PasteTextParams, ScrollParams, SimulateFileUploadParams,
    SmartFillFormParams, TextTargetParams, TypeTextParams, UploadFileParams, WaitForElementParams,
};
pub use response::{ActionResult, ElementInfo, ElementRect};
