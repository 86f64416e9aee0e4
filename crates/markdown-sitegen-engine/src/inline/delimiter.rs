use super::types::{Segment, SegmentKind};

/// Splits every segment on a literal delimiter, alternating kinds.
///
/// Pieces at even indices keep the segment's own kind and url; pieces at odd
/// indices become `target` with no url. Pairing is not checked, so an
/// unmatched delimiter turns the rest of the text into `target`. Every
/// segment is split regardless of its kind, and empty pieces are kept.
///
/// ```rust
/// use markdown_sitegen_engine::{Segment, SegmentKind, split_delimiter};
///
/// let out = split_delimiter(vec![Segment::plain("a`x`b")], "`", SegmentKind::Code);
/// assert_eq!(
///     out,
///     vec![
///         Segment::plain("a"),
///         Segment::new("x", SegmentKind::Code),
///         Segment::plain("b"),
///     ]
/// );
/// ```
pub fn split_delimiter(
    segments: Vec<Segment>,
    delimiter: &str,
    target: SegmentKind,
) -> Vec<Segment> {
    if delimiter.is_empty() {
        return segments;
    }

    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        if !segment.text.contains(delimiter) {
            out.push(segment);
            continue;
        }

        for (i, piece) in segment.text.split(delimiter).enumerate() {
            if i % 2 == 0 {
                out.push(Segment {
                    text: piece.to_string(),
                    kind: segment.kind,
                    url: segment.url.clone(),
                });
            } else {
                out.push(Segment::new(piece, target));
            }
        }
    }
    out
}
