//! # Inline Parsing
//!
//! Splits a run of inline markdown into typed [`Segment`]s.
//!
//! ## Architecture
//!
//! Parsing is a fixed list of [`Stage`]s applied in order to a growing list of
//! segments. Each stage only rewrites the text it is handed; the order of the
//! list decides which constructs win.
//!
//! ## Modules
//!
//! - **`types`**: `Segment` and the closed `SegmentKind` set
//! - **`kinds`**: Inline constructs with owned delimiters and patterns
//! - **`delimiter`**: `split_delimiter()`, the alternating even/odd splitter
//! - **`links`**: Image and link extraction and splitting
//! - **`pipeline`**: `Stage`, `DEFAULT_STAGES` and the `parse_inline()` entry point
//!
//! ## Stage Order
//!
//! Code spans run first, then `**`, then `*`, then images, then links. Bold must
//! consume `**` before the single `*` italic stage sees the text, and images must
//! be taken before links or `![alt](url)` would be read as `!` plus a link.

pub mod delimiter;
pub mod kinds;
pub mod links;
pub mod pipeline;
pub mod types;

pub use delimiter::split_delimiter;
pub use links::{extract_images, extract_links, split_images, split_links};
pub use pipeline::{DEFAULT_STAGES, Stage, parse_inline, parse_inline_with};
pub use types::{Segment, SegmentKind};
