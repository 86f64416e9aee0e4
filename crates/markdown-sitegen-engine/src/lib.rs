//! # markdown-sitegen engine
//!
//! Turns a run of inline markdown into typed [`Segment`]s and renders them as
//! HTML through a small node tree.
//!
//! ## Modules
//!
//! - **`inline`**: segment model, delimiter splitting, image/link splitting and
//!   the staged pipeline behind [`parse_inline`]
//! - **`html`**: [`LeafNode`] / [`ParentNode`] tree, attribute rendering and the
//!   segment to node mapping
//! - **`error`**: the crate-wide [`Error`] type
//!
//! ```rust
//! use markdown_sitegen_engine::{parse_inline, to_html_node};
//!
//! let html = parse_inline("a **bold** move")
//!     .iter()
//!     .map(|segment| to_html_node(segment).render())
//!     .collect::<Result<String, _>>()
//!     .unwrap();
//! assert_eq!(html, "a <b>bold</b> move");
//! ```

pub mod error;
pub mod html;
pub mod inline;

pub use error::Error;
pub use html::{
    Attributes, HtmlNode, LeafNode, ParentNode, render_inline, to_html_node, to_html_node_escaped,
};
pub use inline::{
    DEFAULT_STAGES, Segment, SegmentKind, Stage, extract_images, extract_links, parse_inline,
    parse_inline_with, split_delimiter, split_images, split_links,
};
