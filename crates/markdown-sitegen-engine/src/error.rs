use thiserror::Error;

/// Failures raised while building segments or rendering HTML nodes.
///
/// None of these are recoverable: callers treat them as invalid input for the
/// document being rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid segment kind: {0}")]
    InvalidKind(String),

    #[error("Leaf node has no value")]
    MissingValue,

    #[error("Parent node has no tag")]
    MissingTag,

    #[error("Parent node has no children")]
    MissingChildren,
}
