//! Text-to-element resolution and interactability.

mod interactable;
mod matcher;
mod resolver;
mod suggest;

pub use interactable::is_interactable;
pub use matcher::TextMatcher;
pub use resolver::{Locator, Resolver};
pub use suggest::{similar_elements, suggestion_lines};
