use super::{
    delimiter::split_delimiter,
    kinds::{CodeSpan, Emphasis, Strong},
    links::{split_images, split_links},
    types::{Segment, SegmentKind},
};

/// One step of the inline pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Split on a literal delimiter, tagging odd pieces with `kind`.
    Delimiter {
        delimiter: &'static str,
        kind: SegmentKind,
    },
    /// Pull `![alt](url)` out of plain segments.
    Images,
    /// Pull `[text](url)` out of plain segments.
    Links,
}

impl Stage {
    pub fn apply(self, segments: Vec<Segment>) -> Vec<Segment> {
        match self {
            Stage::Delimiter { delimiter, kind } => split_delimiter(segments, delimiter, kind),
            Stage::Images => split_images(segments),
            Stage::Links => split_links(segments),
        }
    }
}

/// The stage order used by [`parse_inline`]. Changing it changes the output.
pub const DEFAULT_STAGES: [Stage; 5] = [
    Stage::Delimiter {
        delimiter: CodeSpan::TICK,
        kind: SegmentKind::Code,
    },
    Stage::Delimiter {
        delimiter: Strong::DELIMITER,
        kind: SegmentKind::Bold,
    },
    Stage::Delimiter {
        delimiter: Emphasis::DELIMITER,
        kind: SegmentKind::Italic,
    },
    Stage::Images,
    Stage::Links,
];

/// Parses a run of inline markdown into segments using [`DEFAULT_STAGES`].
///
/// Text without markup, including the empty string, comes back as a single
/// plain segment.
///
/// # Nesting
/// Emphasis is not nested. `**bold and *italic* text**` becomes bold, italic
/// and bold segments side by side rather than italic inside bold.
pub fn parse_inline(text: &str) -> Vec<Segment> {
    parse_inline_with(text, &DEFAULT_STAGES)
}

/// Parses inline markdown with an explicit, ordered list of stages.
pub fn parse_inline_with(text: &str, stages: &[Stage]) -> Vec<Segment> {
    stages
        .iter()
        .fold(vec![Segment::plain(text)], |segments, stage| {
            let out = stage.apply(segments);
            log::trace!("inline stage {stage:?} -> {} segments", out.len());
            out
        })
}
