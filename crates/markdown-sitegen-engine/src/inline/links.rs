use std::ops::Range;

use regex::Regex;

use super::{
    kinds::{Image, Link},
    types::{Segment, SegmentKind},
};

/// One `[label](url)` occurrence with its byte range in the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch {
    pub label: String,
    pub url: String,
    /// Full range including `!`, brackets and parentheses.
    pub range: Range<usize>,
}

/// Finds every `![alt](url)` in `text`, left to right.
pub fn find_images(text: &str) -> Vec<InlineMatch> {
    find_matches(Image::regex(), text)
}

/// Finds every `[text](url)` in `text`, left to right.
///
/// Image syntax matches here as well; split images first.
pub fn find_links(text: &str) -> Vec<InlineMatch> {
    find_matches(Link::regex(), text)
}

/// Returns `(alt, url)` pairs for every image in `text`.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    find_images(text)
        .into_iter()
        .map(|m| (m.label, m.url))
        .collect()
}

/// Returns `(text, url)` pairs for every link in `text`.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    find_links(text)
        .into_iter()
        .map(|m| (m.label, m.url))
        .collect()
}

/// Splits images out of plain segments.
pub fn split_images(segments: Vec<Segment>) -> Vec<Segment> {
    split_matches(segments, SegmentKind::Image, find_images)
}

/// Splits links out of plain segments.
pub fn split_links(segments: Vec<Segment>) -> Vec<Segment> {
    split_matches(segments, SegmentKind::Link, find_links)
}

// Labels and ranges come from the same captures so they always line up.
fn find_matches(re: &Regex, text: &str) -> Vec<InlineMatch> {
    re.captures_iter(text)
        .filter_map(|caps| {
            let full = caps.get(0)?;
            Some(InlineMatch {
                label: caps.get(1).map_or("", |m| m.as_str()).to_string(),
                url: caps.get(2).map_or("", |m| m.as_str()).to_string(),
                range: full.range(),
            })
        })
        .collect()
}

fn split_matches(
    segments: Vec<Segment>,
    kind: SegmentKind,
    find: fn(&str) -> Vec<InlineMatch>,
) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        // Only plain text still carries raw markup at this point
        if segment.kind != SegmentKind::Plain {
            out.push(segment);
            continue;
        }

        let matches = find(&segment.text);
        if matches.is_empty() {
            out.push(segment);
            continue;
        }

        let mut last = 0;
        for m in matches {
            if m.range.start > last {
                out.push(Segment::plain(&segment.text[last..m.range.start]));
            }
            out.push(Segment::with_url(m.label, kind, m.url));
            last = m.range.end;
        }
        if last < segment.text.len() {
            out.push(Segment::plain(&segment.text[last..]));
        }
    }
    out
}
