//! Document model: nodes, geometry, styles, selectors, events, fixtures.

mod document;
mod node;
mod selector;
mod types;

pub use document::{NodeFixture, PageDocument, PageFixture};
pub use node::{DispatchedEvent, EventDetail, NodeData, NodeId, StagedFile};
pub use selector::SelectorList;
pub use types::{BoundingBox, ComputedStyle, NodeAttributes, ViewportInfo};
