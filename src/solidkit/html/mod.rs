//! # Hierarchical Text Builder
//!
//! Builds a tree of named nodes step by step and renders it as indented,
//! HTML-like nested tags. Construction ([`HtmlBuilder`]) and serialization
//! ([`render`]) are kept apart: the builder only grows the tree, the renderer
//! only reads it.
//!
//! ## Usage
//!
//! ```ignore
//! let mut builder = HtmlBuilder::new("ul")?;
//! builder.add_child("li", "Hello")?.add_child("li", "World")?;
//! assert_eq!(
//!     builder.render(),
//!     "<ul>\n  <li>\n    Hello\n  </li>\n  <li>\n    World\n  </li>\n</ul>\n"
//! );
//! ```
//!
//! Deeper trees go through [`HtmlBuilder::add_child_with`], which hands a scoped
//! [`ElementBuilder`] for the new node to a closure.

mod builder;
mod element;
pub mod render;

pub use builder::{ElementBuilder, HtmlBuilder};
pub use element::HtmlElement;
pub use render::{LineEnding, RenderOptions, DEFAULT_INDENT_SIZE};
