//! Page-automation engine: element resolution, interactability, executors,
//! and request dispatch over a synthetic page document.
//!
//! The engine never talks to a real browser. It operates on a
//! [`dom::PageDocument`] the host supplies (mirrored from a live page, or a
//! JSON fixture in tests and the CLI), records the synthetic events it would
//! have dispatched, and returns the stable success/error envelope defined in
//! `webgrip-protocols`.

pub mod dispatcher;
pub mod dom;
pub mod exec;
pub mod policy;
pub mod resolve;
pub mod session;

pub use dispatcher::{dispatch, dispatch_control, dispatch_value, handle};
pub use policy::EnginePolicy;
pub use session::PageSession;
