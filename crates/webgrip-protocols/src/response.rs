//! The action result envelope.
//!
//! The calling agent only ever observes one of two shapes:
//! `{ success: true, message?, data?, element_info?, ... }` or
//! `{ error, suggestions? }`. The two are mutually exclusive; an untagged
//! enum keeps that a type-level fact rather than a convention.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response envelope returned for every action request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionResult {
    Success(ActionSuccess),
    Failure(ActionFailure),
}

/// The success shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionSuccess {
    /// Always `true`; kept explicit so the serialized form matches the wire
    /// contract exactly.
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_info: Option<ElementInfo>,
    /// Verb-specific top-level fields (filledCount, clickedCount, errors, ...).
    /// An empty map contributes no keys to the serialized form.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The failure shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionFailure {
    pub error: String,
    /// Actionable next guesses: similar-element summaries and common
    /// selectors, mixed strings and objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<Value>>,
}

impl ActionResult {
    /// Successful result with a one-line message.
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(ActionSuccess {
            success: true,
            message: Some(message.into()),
            data: None,
            element_info: None,
            extra: Map::new(),
        })
    }

    /// Successful result carrying a structured payload.
    pub fn success_data(data: Value) -> Self {
        Self::Success(ActionSuccess {
            success: true,
            message: None,
            data: Some(data),
            element_info: None,
            extra: Map::new(),
        })
    }

    /// Failure with a one-line error message.
    pub fn error(error: impl Into<String>) -> Self {
        Self::Failure(ActionFailure {
            error: error.into(),
            suggestions: None,
        })
    }

    /// Failure with suggestions attached.
    pub fn error_with_suggestions(error: impl Into<String>, suggestions: Vec<Value>) -> Self {
        Self::Failure(ActionFailure {
            error: error.into(),
            suggestions: Some(suggestions),
        })
    }

    /// Attach a structured payload to a success.
    pub fn with_data(mut self, data: Value) -> Self {
        if let Self::Success(ref mut s) = self {
            s.data = Some(data);
        }
        self
    }

    /// Attach resolved-element metadata to a success.
    pub fn with_element_info(mut self, info: ElementInfo) -> Self {
        if let Self::Success(ref mut s) = self {
            s.element_info = Some(info);
        }
        self
    }

    /// Attach a verb-specific top-level field to a success.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        if let Self::Success(ref mut s) = self {
            s.extra.insert(key.into(), value);
        }
        self
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The error message, if this is a failure.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failure(f) => Some(&f.error),
            Self::Success(_) => None,
        }
    }
}

/// Geometry of a reported element, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Metadata about a resolved element, captured at resolution time.
///
/// Derived data only; the live node reference never crosses the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementInfo {
    #[serde(rename = "tagName")]
    pub tag_name: String,
    /// Truncated text content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub position: ElementRect,
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
