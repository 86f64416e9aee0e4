//! # Inline Kinds
//!
//! Inline constructs that own their syntax: every delimiter and pattern lives
//! here, not in the splitters or the pipeline.
//!
//! ## Types
//!
//! - **`CodeSpan`**: ``TICK = "`"``
//! - **`Strong`**: `DELIMITER = "**"`
//! - **`Emphasis`**: `DELIMITER = "*"`
//! - **`Image`**: `![alt](url)` pattern
//! - **`Link`**: `[text](url)` pattern

pub mod code_span;
pub mod emphasis;
pub mod image;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use image::Image;
pub use link::Link;
