//! # HTML Nodes
//!
//! A minimal HTML tree for rendering inline segments.
//!
//! - **`attributes`**: ordered `key="value"` attribute lists
//! - **`node`**: [`LeafNode`], [`ParentNode`] and the [`HtmlNode`] tree
//! - **`convert`**: segment to leaf mapping and the [`render_inline`] helper
//!
//! Rendering is fallible: a leaf without a value, or a parent without a tag or
//! children, is an error rather than empty output.

pub mod attributes;
pub mod convert;
pub mod node;

pub use attributes::Attributes;
pub use convert::{render_inline, to_html_node, to_html_node_escaped};
pub use node::{HtmlNode, LeafNode, ParentNode};
