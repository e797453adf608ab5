//! Action error taxonomy.
//!
//! Each failure class gets its own variant so the relay can decide whether
//! to retry (interactability), rephrase (not found), or give up (validation).
//! Errors are always resolved to an envelope, never thrown across the message
//! boundary.

use thiserror::Error;

use crate::response::ActionResult;

#[derive(Debug, Error)]
pub enum ActionError {
    /// The locator matched nothing.
    #[error("Element not found: {0}")]
    NotFound(String),

    /// The element exists but cannot currently be acted on. Reported
    /// distinctly from NotFound so callers can wait and retry.
    #[error("Element found but not interactable: {0}")]
    NotInteractable(String),

    /// Malformed or unsupported parameter; no DOM side effects were
    /// attempted.
    #[error("{0}")]
    Validation(String),

    /// Bounded wait elapsed without the condition holding.
    #[error("Element not found within {0}ms timeout")]
    Timeout(u64),

    /// Catch-all for unexpected executor failures.
    #[error("{0}")]
    Internal(String),
}

impl From<ActionError> for ActionResult {
    fn from(err: ActionError) -> Self {
        ActionResult::error(err.to_string())
    }
}
